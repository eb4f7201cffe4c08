use super::*;

/// Mask bit n maps to octant n.
#[test]
fn test_has_child_uses_natural_octants() {
  let node = OctreeNode::new(0, 0b1000_0001);

  assert!(node.has_child(0));
  assert!(node.has_child(7));
  for octant in 1..7 {
    assert!(!node.has_child(octant), "octant {octant} should be empty");
  }
}

/// Children are packed: index = first_child + populated octants below.
#[test]
fn test_child_index_counts_lower_bits() {
  let node = OctreeNode::new(10, 0b0110_1010);

  assert_eq!(node.child_index(1), 10);
  assert_eq!(node.child_index(3), 11);
  assert_eq!(node.child_index(5), 12);
  assert_eq!(node.child_index(6), 13);
}

#[test]
fn test_full_node() {
  let node = OctreeNode::new(4, 0xff);

  assert_eq!(node.child_count(), 8);
  for octant in 0..8u8 {
    assert_eq!(node.child_index(octant), 4 + octant as usize);
  }
}

#[test]
fn test_octants_ascending() {
  let node = OctreeNode::new(0, 0b1010_0100);
  assert_eq!(node.octants().collect::<Vec<_>>(), vec![2, 5, 7]);
}

#[test]
fn test_empty_node() {
  let node = OctreeNode::default();

  assert_eq!(node.child_count(), 0);
  assert_eq!(node.octants().count(), 0);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_has_child_rejects_octant_8() {
  OctreeNode::new(0, 0xff).has_child(8);
}

#[test]
#[should_panic(expected = "not populated")]
fn test_child_index_of_missing_octant() {
  OctreeNode::new(0, 0b0000_0001).child_index(1);
}
