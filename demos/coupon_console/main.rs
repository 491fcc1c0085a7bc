//! Walk through the coupon screen against the seeded in-memory store.
//!
//! Run with `cargo run --example coupon_console`. Set `BACKOFFICE_LOG=debug`
//! to see the filter and store logs. Pass a YAML config path as the first
//! argument to override coupon defaults.

use anyhow::Result;
use backoffice::prelude::*;
use backoffice::telemetry::init_tracing;

fn print_rows(title: &str, coupons: &[Coupon]) {
    println!("\n{} ({})", title, coupons.len());
    for c in coupons {
        println!(
            "  #{:<3} {:<14} {:<10} {:<9} {:>6} {}",
            c.id, c.code, c.status, c.coupon_type, c.discount_value, c.discount_type
        );
    }
}

fn print_stats(stats: &CouponStats) {
    println!("\nStats");
    println!(
        "  total {}  active {}  expired {}  inactive {}",
        stats.total, stats.by_status.active, stats.by_status.expired, stats.by_status.inactive
    );
    println!(
        "  generated {}  community {}  usage {}  savings {:.2}",
        stats.by_type.generated, stats.by_type.community, stats.total_usage, stats.total_savings
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => ConsoleConfig::from_yaml_file(&path)?,
        None => ConsoleConfig::default(),
    };

    let store = Arc::new(InMemoryStore::seeded(seed::coupons()));
    let mut board = CouponBoard::new(store);
    board.refresh().await;

    print_rows("All coupons", board.visible());
    print_stats(&board.stats());

    board.apply_filter_inputs("", "", "Generate");
    print_rows("Generated coupons", board.visible());

    board.apply_filter_inputs("", "", "");
    let mut form = CouponForm::new(config.coupons.clone());
    form.show_create(CouponType::Generated);
    if let Some(draft) = form.draft_mut() {
        draft.name = "Weekend flash sale".to_string();
        draft.discount_value = 15.0;
    }
    form.set_quantity(3);
    let outcome = board.save_form(&mut form).await?;
    println!("\n{}", outcome.message);

    let auto_yes = |message: &str| {
        println!("\n{} [y]", message);
        true
    };
    let outcome = board.delete_expired(&auto_yes).await?;
    println!("{:?}", outcome);

    print_rows("After cleanup", board.visible());
    print_stats(&board.stats());

    Ok(())
}
