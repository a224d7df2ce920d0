extern crate std;

use alloc::{collections::VecDeque, vec::Vec};

use core::ptr::NonNull;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::linked_list::intrusive::{
    list::SList,
    position::Position,
    single::SingleNode,
    traits::{Link, NodeWithData},
};

const NODES: usize = 32;
const STEPS: usize = 5_000;

fn position_at(list: &SList<SingleNode<usize>>, index: usize) -> Position<SingleNode<usize>> {
    let mut pos = list.begin();
    for _ in 0..index {
        pos = unsafe { list.advance(pos) };
    }
    pos
}

fn check(list: &SList<SingleNode<usize>>, model: &VecDeque<usize>) {
    assert_eq!(list.assert_invariants(), model.len());
    let actual: Vec<usize> = list.iter().map(|n| unsafe { *n.as_ref().data() }).collect();
    assert!(actual.iter().eq(model.iter()), "{actual:?} != {model:?}");
    if let (Some(&front), Some(&back)) = (model.front(), model.back()) {
        assert_eq!(unsafe { *list.front().as_ref().data() }, front);
        assert_eq!(unsafe { *list.back().as_ref().data() }, back);
    } else {
        assert!(list.is_empty());
        assert_eq!(list.begin(), list.end());
    }
}

#[test]
fn test_random_operations_match_vecdeque() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut nodes: Vec<SingleNode<usize>> = (0..NODES).map(SingleNode::new).collect();
    let ptrs: Vec<NonNull<SingleNode<usize>>> = nodes.iter_mut().map(NonNull::from).collect();

    let mut list = SList::new();
    let mut model: VecDeque<usize> = VecDeque::new();

    for _ in 0..STEPS {
        let idle: Vec<usize> = (0..NODES).filter(|i| !model.contains(i)).collect();
        match rng.random_range(0..100) {
            0..20 if !idle.is_empty() => {
                let id = idle[rng.random_range(0..idle.len())];
                unsafe { list.push_front(ptrs[id]) };
                model.push_front(id);
            }
            20..40 if !idle.is_empty() => {
                let id = idle[rng.random_range(0..idle.len())];
                unsafe { list.push_back(ptrs[id]) };
                model.push_back(id);
            }
            40..55 => {
                let popped = list.pop_front();
                let expected = model.pop_front();
                assert_eq!(popped, expected.map(|id| ptrs[id]));
                if let Some(node) = popped {
                    assert!(unsafe { !node.as_ref().is_linked() });
                }
            }
            55..75 if !idle.is_empty() => {
                let id = idle[rng.random_range(0..idle.len())];
                let index = rng.random_range(0..=model.len());
                let pos = position_at(&list, index);
                let inserted = unsafe { list.insert(pos, ptrs[id]) };
                assert_eq!(unsafe { list.get(inserted) }, ptrs[id]);
                model.insert(index, id);
            }
            75..98 if !model.is_empty() => {
                let index = rng.random_range(0..model.len());
                let pos = position_at(&list, index);
                let next = unsafe { list.erase(pos) };
                let id = model.remove(index).unwrap();
                assert!(unsafe { !ptrs[id].as_ref().is_linked() });
                match model.get(index) {
                    Some(&following) => {
                        assert_eq!(unsafe { *list.get(next).as_ref().data() }, following)
                    }
                    None => assert!(next.is_end()),
                }
            }
            98..100 => {
                list.clear();
                model.clear();
            }
            _ => {}
        }
        check(&list, &model);
    }

    list.clear();
    assert!(nodes.iter().all(|node| !node.is_linked()));
}
