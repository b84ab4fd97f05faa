use crate::core::StrategyKind;

/// 利用可能な戦略の一覧を表示する
pub fn list_strategies() {
    println!("📋 利用可能な戦略:");
    for kind in StrategyKind::ALL {
        println!("   {:<12} {}", kind.as_str(), kind.description());
    }
}
