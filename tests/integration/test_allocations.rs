// キャッシュモードごとのヒープ割り当て回数
use invocation_bench::{
    core::CacheMode, strategies::create_strategy, BenchContext, CallArguments, StrategyKind,
};
use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

// 並列実行される他のテストの割り当てを数えないよう、スレッドごとに集計する
struct CountingAllocator;

thread_local! {
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let _ = ALLOCATIONS.try_with(|count| count.set(count.get() + 1));
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

fn allocations_during(calls: usize, mut f: impl FnMut()) -> usize {
    let before = ALLOCATIONS.with(Cell::get);
    for _ in 0..calls {
        f();
    }
    ALLOCATIONS.with(Cell::get) - before
}

#[test]
fn test_non_cached_allocates_receiver_per_call() {
    let context = BenchContext::resolve().unwrap();
    let arguments = CallArguments::default();

    for kind in StrategyKind::ALL {
        let mut non_cached = create_strategy(kind, CacheMode::NonCached, arguments, &context).unwrap();
        let mut cached = create_strategy(kind, CacheMode::Cached, arguments, &context).unwrap();
        non_cached.invoke().unwrap();
        cached.invoke().unwrap();

        let fresh = allocations_during(100, || {
            non_cached.invoke().unwrap();
        });
        let reused = allocations_during(100, || {
            cached.invoke().unwrap();
        });

        assert!(fresh >= 100, "{kind}: {fresh} allocations for 100 calls");
        assert!(fresh > reused, "{kind}: non-cached {fresh} vs cached {reused}");
    }
}

#[test]
fn test_cached_direct_and_compiled_do_not_allocate() {
    let context = BenchContext::resolve().unwrap();

    for kind in [StrategyKind::Direct, StrategyKind::Compiled] {
        let mut cached =
            create_strategy(kind, CacheMode::Cached, CallArguments::default(), &context).unwrap();
        let count = allocations_during(100, || {
            cached.invoke().unwrap();
        });
        assert_eq!(count, 0, "{kind}");
    }
}
