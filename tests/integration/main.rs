// 統合テストのエントリーポイント

#[path = "../fixtures/mod.rs"]
mod fixtures;

mod test_allocations;
mod test_end_to_end;
mod test_error_handling;
mod test_main_entry_point;
mod test_performance;
mod test_strategies;
