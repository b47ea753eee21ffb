//! Ordering properties of the frontier containers.

use proptest::prelude::*;

use search_agents::search::{CostQueue, FifoQueue, Frontier, LifoStack, NodeId};

fn pop_all<F: Frontier>(frontier: &mut F) -> Vec<u32> {
    let mut out = Vec::new();
    frontier.drain_into(&mut out);
    out.into_iter().map(|id| id.0).collect()
}

proptest! {
    #[test]
    fn fifo_pops_in_push_order(costs in prop::collection::vec(0u8..10, 0..64)) {
        let mut queue = FifoQueue::new();
        for (i, &c) in costs.iter().enumerate() {
            queue.push(NodeId::new(i as u32), f64::from(c));
        }
        prop_assert_eq!(queue.len(), costs.len());

        let expected: Vec<u32> = (0..costs.len() as u32).collect();
        prop_assert_eq!(pop_all(&mut queue), expected);
        prop_assert!(queue.is_empty());
    }

    #[test]
    fn lifo_pops_in_reverse_push_order(costs in prop::collection::vec(0u8..10, 0..64)) {
        let mut stack = LifoStack::new();
        for (i, &c) in costs.iter().enumerate() {
            stack.push(NodeId::new(i as u32), f64::from(c));
        }

        let expected: Vec<u32> = (0..costs.len() as u32).rev().collect();
        prop_assert_eq!(pop_all(&mut stack), expected);
    }

    #[test]
    fn cost_queue_pops_by_cost_then_insertion(costs in prop::collection::vec(0u8..6, 0..64)) {
        let mut queue = CostQueue::new();
        for (i, &c) in costs.iter().enumerate() {
            queue.push(NodeId::new(i as u32), f64::from(c));
        }

        let mut expected: Vec<u32> = (0..costs.len() as u32).collect();
        expected.sort_by_key(|&i| (costs[i as usize], i));

        prop_assert_eq!(queue.peek_cost(), expected.first().map(|&i| f64::from(costs[i as usize])));
        prop_assert_eq!(pop_all(&mut queue), expected);
    }

    #[test]
    fn cost_queue_interleaved_pops_stay_sorted(
        ops in prop::collection::vec(prop::option::of(0u8..6), 1..80)
    ) {
        // Some(c) pushes with cost c, None pops
        let mut queue = CostQueue::new();
        let mut pending: Vec<(u8, u32)> = Vec::new();
        let mut next = 0u32;

        for op in ops {
            match op {
                Some(c) => {
                    queue.push(NodeId::new(next), f64::from(c));
                    pending.push((c, next));
                    next += 1;
                }
                None => {
                    pending.sort();
                    let expected = if pending.is_empty() {
                        None
                    } else {
                        Some(pending.remove(0).1)
                    };
                    prop_assert_eq!(queue.pop().map(|id| id.0), expected);
                }
            }
        }
        prop_assert_eq!(queue.len(), pending.len());
    }
}
