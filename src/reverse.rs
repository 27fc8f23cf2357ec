use crate::node::Link;

/// Reverses a chain in place and returns its new head (the old tail).
///
/// Every node keeps its heap allocation and value; only the `next` links are
/// rewritten. Runs in O(n) time with O(1) extra space. An empty chain comes
/// back empty. The returned chain can be dropped directly at any length.
///
/// ```
/// use list_reversal::node::{from_vec, into_vec};
/// use list_reversal::reverse_list;
///
/// let head = reverse_list(from_vec(vec![1, 2, 3]));
/// assert_eq!(into_vec(head), vec![3, 2, 1]);
/// ```
pub fn reverse_list<T>(head: Link<T>) -> Link<T> {
    let mut previous = None;
    let mut current = head;

    while let Some(mut node) = current {
        // successor must be taken before the link is overwritten
        let next = node.next.take();
        node.next = previous;
        previous = Some(node);
        current = next;
    }

    previous
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{self, from_vec, into_vec, ListNode};
    use proptest::prelude::*;

    fn addresses<T>(head: &Link<T>) -> Vec<*const ListNode<T>> {
        node::nodes(head).map(|n| n as *const ListNode<T>).collect()
    }

    #[test]
    fn test_reverse_five() {
        let head = reverse_list(from_vec(vec![1, 2, 3, 4, 5]));
        assert_eq!(into_vec(head), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_reverse_empty() {
        let head: Link<i32> = reverse_list(None);
        assert!(head.is_none());
    }

    #[test]
    fn test_reverse_single() {
        let head = reverse_list(from_vec(vec![7]));
        let node = head.as_deref().unwrap();
        assert_eq!(node.value, 7);
        assert!(node.next.is_none());
    }

    #[test]
    fn test_reverse_two() {
        let head = reverse_list(from_vec(vec![1, 2]));
        assert_eq!(into_vec(head), vec![2, 1]);
    }

    #[test]
    fn test_nodes_are_reused() {
        let head = from_vec(vec![10, 20, 30, 40]);
        let mut before = addresses(&head);

        let head = reverse_list(head);
        before.reverse();

        assert_eq!(addresses(&head), before);
    }

    #[test]
    fn test_new_tail_is_old_head() {
        let head = from_vec(vec!["first", "middle", "last"]);
        let old_head = head.as_deref().unwrap() as *const ListNode<&str>;

        let head = reverse_list(head);
        let tail = node::nodes(&head).last().unwrap();

        assert_eq!(tail as *const ListNode<&str>, old_head);
        assert_eq!(tail.value, "first");
        assert!(tail.next.is_none());
    }

    #[test]
    fn test_non_copy_payload() {
        let words = vec!["alpha".to_string(), "beta".to_string(), "gamma".to_string()];
        let head = reverse_list(from_vec(words));
        assert_eq!(into_vec(head), vec!["gamma", "beta", "alpha"]);
    }

    #[test]
    fn test_long_chain() {
        let values: Vec<u32> = (0..5_000).collect();
        let head = reverse_list(from_vec(values.clone()));
        let expected: Vec<u32> = values.into_iter().rev().collect();
        assert_eq!(into_vec(head), expected);
    }

    #[test]
    fn test_drop_reversed_million_node_chain() {
        let head = reverse_list(from_vec((0..1_000_000u32).collect()));
        assert_eq!(head.as_deref().map(|node| node.value), Some(999_999));
        drop(head);
    }

    proptest! {
        #[test]
        fn prop_reverse_matches_vec_reverse(values in prop::collection::vec(any::<i32>(), 0..200)) {
            let head = reverse_list(from_vec(values.clone()));
            let mut expected = values;
            expected.reverse();
            prop_assert_eq!(into_vec(head), expected);
        }

        #[test]
        fn prop_reverse_is_involution(values in prop::collection::vec(any::<i64>(), 0..200)) {
            let head = reverse_list(reverse_list(from_vec(values.clone())));
            prop_assert_eq!(into_vec(head), values);
        }

        #[test]
        fn prop_node_count_preserved(values in prop::collection::vec(any::<u8>(), 0..200)) {
            let head = from_vec(values);
            let before = node::len(&head);
            let head = reverse_list(head);
            prop_assert_eq!(node::len(&head), before);
        }
    }
}
