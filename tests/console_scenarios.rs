//! End-to-end scenarios over the seeded in-memory stores: filtering, stats,
//! selection, confirmation-gated deletes and the create/edit forms.

use backoffice::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn coupon(id: i64, code: &str, status: CouponStatus) -> Coupon {
    let mut c = Coupon::draft(
        CouponType::Generated,
        code.to_string(),
        date(2025, 1, 1),
        date(2025, 12, 31),
    );
    c.id = id;
    c.name = format!("Coupon {}", code);
    c.discount_value = 10.0;
    c.status = status;
    c
}

async fn board_with(coupons: Vec<Coupon>) -> CouponBoard<InMemoryStore<Coupon>> {
    let mut board = CouponBoard::new(Arc::new(InMemoryStore::seeded(coupons)));
    board.refresh().await;
    board
}

// =============================================================================
// Coupons
// =============================================================================

#[tokio::test]
async fn test_delete_expired_keeps_active() {
    let mut board = board_with(vec![
        coupon(1, "KEEP", CouponStatus::Active),
        coupon(2, "OLD1", CouponStatus::Expired),
        coupon(3, "OLD2", CouponStatus::Expired),
    ])
    .await;

    assert_eq!(board.expired_coupons().len(), 2);

    let outcome = board.delete_expired(&|_: &str| true).await.unwrap();

    assert_eq!(
        outcome,
        DeleteOutcome::Deleted {
            removed: 2,
            missing: 0
        }
    );
    assert_eq!(board.coupons().len(), 1);
    assert_eq!(board.coupons()[0].code, "KEEP");
    assert_eq!(board.visible().len(), 1);
    assert_eq!(board.stats().by_status.expired, 0);
}

#[tokio::test]
async fn test_declined_bulk_delete_leaves_store_untouched() {
    let mut board = board_with(vec![
        coupon(1, "KEEP", CouponStatus::Active),
        coupon(2, "OLD1", CouponStatus::Expired),
    ])
    .await;

    let outcome = board.delete_expired(&|_: &str| false).await.unwrap();

    assert_eq!(outcome, DeleteOutcome::Declined);
    assert_eq!(board.store().len(), 2);
}

#[tokio::test]
async fn test_delete_expired_with_none_expired_skips_prompt() {
    let mut board = board_with(vec![coupon(1, "KEEP", CouponStatus::Active)]).await;

    let outcome = board
        .delete_expired(&|_: &str| -> bool { panic!("no prompt expected") })
        .await
        .unwrap();

    assert_eq!(outcome, DeleteOutcome::NothingToDelete);
}

#[tokio::test]
async fn test_stats_follow_collection_not_filter() {
    let mut board = board_with(seed::coupons()).await;
    board.apply_filter_inputs("welcome", "", "");

    let stats = board.stats();

    assert_eq!(board.visible().len(), 1);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.by_status.active, 1);
    assert_eq!(stats.by_status.expired, 1);
    assert_eq!(stats.by_status.inactive, 1);
    assert_eq!(stats.by_type.generated, 2);
    assert_eq!(stats.by_discount_type.fixed, 2);
    assert_eq!(stats.total_usage, 360);
}

#[tokio::test]
async fn test_filter_change_drops_hidden_selection() {
    let mut board = board_with(seed::coupons()).await;
    board.toggle(1);
    board.toggle(2);

    board.apply_filter_inputs("", "Active", "");

    assert_eq!(board.selection().selected_ids(), vec![1]);
    assert!(board.all_selected());
}

#[test]
fn test_criteria_from_select_labels() {
    let criteria = CouponCriteria::from_labels(" runners ", "expired", "Community");

    assert_eq!(criteria.status, Some(CouponStatus::Expired));
    assert_eq!(criteria.kind, Some(CouponType::Community));

    let unknown = CouponCriteria::from_labels("", "All", "");
    assert_eq!(unknown.status, None);
    assert_eq!(unknown.kind, None);
    assert!(unknown.is_empty());
}

#[tokio::test]
async fn test_community_coupon_needs_community_name() {
    let mut board = board_with(seed::coupons()).await;
    let mut form = CouponForm::default();
    form.show_create_on(CouponType::Community, date(2025, 6, 1));
    {
        let draft = form.draft_mut().unwrap();
        draft.name = "Book club".to_string();
        draft.discount_value = 5.0;
    }

    let err = board.save_form(&mut form).await.unwrap_err();

    assert!(err.is_validation());
    assert_eq!(form.state(), FormState::CreatingCommunity);
    assert_eq!(board.coupons().len(), 3);

    form.draft_mut().unwrap().community_name = Some("Readers".to_string());
    let outcome = board.save_form(&mut form).await.unwrap();

    assert_eq!(outcome.saved.len(), 1);
    assert_eq!(form.state(), FormState::Closed);
    assert_eq!(board.coupons().len(), 4);
}

#[tokio::test]
async fn test_generated_batch_creates_distinct_codes() {
    let mut board = board_with(seed::coupons()).await;
    let mut form = CouponForm::default();
    form.show_create_on(CouponType::Generated, date(2025, 6, 1));
    form.draft_mut().unwrap().name = "Summer".to_string();
    form.draft_mut().unwrap().discount_value = 20.0;
    form.set_quantity(5);

    let outcome = board.save_form(&mut form).await.unwrap();

    assert_eq!(outcome.saved.len(), 5);
    let mut codes: Vec<&str> = outcome.saved.iter().map(|c| c.code.as_str()).collect();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), 5);
    assert_eq!(board.coupons().len(), 8);
}

#[tokio::test]
async fn test_snapshot_subscribers_see_deletes() {
    let store = Arc::new(InMemoryStore::seeded(seed::coupons()));
    let mut rx = store.subscribe();
    let mut board = CouponBoard::new(store.clone());
    board.refresh().await;
    board.toggle(3);

    board.delete_selected(&|_: &str| true).await.unwrap();

    assert!(rx.has_changed().unwrap());
    let snapshot = rx.borrow_and_update().clone();
    assert_eq!(snapshot.len(), 2);
    assert!(snapshot.items.iter().all(|c| c.id != 3));
}

// =============================================================================
// Orders and slabs
// =============================================================================

#[tokio::test]
async fn test_order_list_filters() {
    let store = InMemoryStore::seeded(seed::orders());
    let mut list: ListView<Order> = ListView::new();
    list.refresh(&store).await;

    list.set_search("dana@example");
    assert_eq!(list.visible().len(), 1);
    assert_eq!(list.visible()[0].order_number, "ORD-1004");

    list.set_criteria(FilterCriteria::from_labels("", "Pending", "Online"));
    assert_eq!(list.visible().len(), 1);
    assert_eq!(list.visible()[0].id, 3);

    list.set_criteria(FilterCriteria::from_labels("", "", "in store"));
    assert_eq!(list.visible().len(), 1);
    assert_eq!(list.visible()[0].channel, OrderChannel::InStore);

    list.clear_filters();
    assert_eq!(list.visible().len(), 4);
}

#[tokio::test]
async fn test_slab_list_and_form() {
    let store = InMemoryStore::seeded(seed::slabs());
    let mut list: ListView<Slab> = ListView::new();
    list.refresh(&store).await;

    list.set_criteria(FilterCriteria::new().kind(CustomerType::Retail));
    assert_eq!(list.visible().len(), 2);

    list.set_criteria(FilterCriteria::new().status(SlabStatus::Inactive));
    assert_eq!(list.visible()[0].name, "Corporate gifting");

    let mut form = SlabForm::new();
    form.edit(&list.visible()[0]);
    form.draft_mut().unwrap().status = SlabStatus::Active;
    form.save(&store).await.unwrap();

    list.refresh(&store).await;
    assert!(list.visible().is_empty());
}
