use std::ptr::NonNull;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::prelude::SliceRandom;
use rand::{SeedableRng, rngs::StdRng};
use slist_collections::{
    linked_list::intrusive::{list::SList, single::SingleNode, traits::NodeWithData},
    pool::NodePool,
};

const SIZES: [usize; 3] = [16, 1_024, 65_536];

fn node_ptrs(nodes: &mut [SingleNode<u64>]) -> Vec<NonNull<SingleNode<u64>>> {
    nodes.iter_mut().map(NonNull::from).collect()
}

fn push_pop_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");
    for size in SIZES {
        let mut nodes: Vec<SingleNode<u64>> = (0..size as u64).map(SingleNode::new).collect();
        let ptrs = node_ptrs(&mut nodes);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("push_back", size), |b| {
            b.iter(|| {
                let mut list = SList::new();
                for &ptr in &ptrs {
                    unsafe { list.push_back(ptr) };
                }
                while let Some(node) = list.pop_front() {
                    black_box(node);
                }
            })
        });

        group.bench_function(BenchmarkId::new("push_front", size), |b| {
            b.iter(|| {
                let mut list = SList::new();
                for &ptr in &ptrs {
                    unsafe { list.push_front(ptr) };
                }
                list.clear();
            })
        });
    }
    group.finish();
}

fn insert_erase_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_erase");
    for size in SIZES {
        let mut nodes: Vec<SingleNode<u64>> = (0..size as u64).map(SingleNode::new).collect();
        let mut ptrs = node_ptrs(&mut nodes);
        ptrs.shuffle(&mut StdRng::seed_from_u64(7));
        group.throughput(Throughput::Elements(size as u64));

        // Keep inserting behind the previously inserted element, then erase
        // everything from the front through positions.
        group.bench_function(BenchmarkId::new("sequential", size), |b| {
            b.iter(|| {
                let mut list = SList::new();
                let mut pos = list.begin();
                for &ptr in &ptrs {
                    unsafe {
                        pos = list.insert(pos, ptr);
                        pos = list.advance(pos);
                    }
                }
                let mut pos = list.begin();
                while !pos.is_end() {
                    pos = unsafe { list.erase(pos) };
                }
            })
        });
    }
    group.finish();
}

fn iter_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("iter");
    for size in SIZES {
        let mut pool = NodePool::with_init(size, |i| i as u64);
        let mut list = SList::new();
        while let Some(node) = pool.acquire() {
            unsafe { list.push_back(node) };
        }
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("sum", size), |b| {
            b.iter(|| {
                list.iter()
                    .map(|node| unsafe { *node.as_ref().data() })
                    .sum::<u64>()
            })
        });

        for node in list.drain() {
            unsafe { pool.release(node) };
        }
    }
    group.finish();
}

criterion_group!(benches, push_pop_benchmark, insert_erase_benchmark, iter_benchmark);
criterion_main!(benches);
