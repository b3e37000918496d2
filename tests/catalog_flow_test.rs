use catalog_cart::controller::CatalogController;
use catalog_cart::model::{CartItem, Product, ProductDraft, ProductId};
use catalog_cart::remote::mock::MockRemote;
use catalog_cart::remote::TransportError;
use catalog_cart::report::{RecordingReporter, Reported};
use std::sync::Arc;

fn widget(id: &str, quantity: u32) -> Product {
    Product::new(id, "Widget", "A widget", 2.5, quantity, true)
}

/// Asserts the session-wide ceiling: no product ever has more units across
/// catalog and cart than the ledger recorded at load time.
fn assert_ledger_ceiling(controller: &CatalogController) {
    for product in controller.catalog().products() {
        let in_cart = controller
            .cart()
            .get(&product.id)
            .map(|item| item.quantity)
            .unwrap_or(0);
        let total = controller
            .ledger()
            .get(&product.id)
            .expect("every catalog product is in the ledger");
        assert!(
            product.quantity + in_cart <= total,
            "ceiling violated for {}: {} + {} > {}",
            product.id,
            product.quantity,
            in_cart,
            total
        );
    }
}

fn system(mock: MockRemote) -> (CatalogController, Arc<MockRemote>, Arc<RecordingReporter>) {
    let remote = Arc::new(mock);
    let reporter = Arc::new(RecordingReporter::new());
    let controller = CatalogController::new(remote.clone(), reporter.clone());
    (controller, remote, reporter)
}

#[tokio::test]
async fn load_seeds_the_ledger_from_catalog_and_cart() {
    let mock = MockRemote::new();
    mock.expect_products(10, 0)
        .return_ok(vec![widget("p1", 4), widget("p2", 0)]);
    mock.expect_cart_items()
        .return_ok(vec![CartItem::new("p1", "Widget", 2.5, 3)]);
    let (mut controller, remote, reporter) = system(mock);

    controller.load().await;

    // Ledger totals are catalog stock plus existing cart reservation.
    assert_eq!(controller.ledger().get(&ProductId::new("p1")), Some(7));
    assert_eq!(controller.ledger().get(&ProductId::new("p2")), Some(0));
    assert_ledger_ceiling(&controller);
    assert!(reporter.is_empty());
    remote.verify();
}

#[tokio::test]
async fn add_to_cart_decrements_catalog_and_creates_or_increments_a_line() {
    let mock = MockRemote::new();
    mock.expect_products(10, 0)
        .return_ok(vec![widget("p1", 5), widget("p2", 0)]);
    mock.expect_cart_items().return_ok(vec![]);
    let (mut controller, remote, _reporter) = system(mock);
    controller.load().await;

    let p1 = ProductId::new("p1");
    controller.add_to_cart(&p1);
    assert_eq!(controller.catalog().get(&p1).unwrap().quantity, 4);
    assert_eq!(controller.cart().get(&p1).unwrap().quantity, 1);

    controller.add_to_cart(&p1);
    assert_eq!(controller.catalog().get(&p1).unwrap().quantity, 3);
    assert_eq!(controller.cart().get(&p1).unwrap().quantity, 2);
    assert_eq!(controller.cart().len(), 1);

    assert_ledger_ceiling(&controller);
    remote.verify();
}

#[tokio::test]
async fn add_to_cart_on_an_exhausted_row_is_a_no_op() {
    let mock = MockRemote::new();
    mock.expect_products(10, 0).return_ok(vec![widget("p2", 0)]);
    mock.expect_cart_items().return_ok(vec![]);
    let (mut controller, remote, _reporter) = system(mock);
    controller.load().await;

    controller.add_to_cart(&ProductId::new("p2"));
    assert_eq!(controller.catalog().get(&ProductId::new("p2")).unwrap().quantity, 0);
    assert!(controller.cart().is_empty());
    remote.verify();
}

#[tokio::test]
async fn delete_removes_the_row_only_after_backend_confirmation() {
    let mock = MockRemote::new();
    mock.expect_products(10, 0)
        .return_ok(vec![widget("p1", 5), widget("p2", 2)]);
    mock.expect_cart_items().return_ok(vec![]);
    mock.expect_delete_product("p1").return_ok(());
    let (mut controller, remote, reporter) = system(mock);
    controller.load().await;

    controller.delete_product(&ProductId::new("p1")).await;
    assert!(controller.catalog().get(&ProductId::new("p1")).is_none());
    assert_eq!(controller.catalog().len(), 1);
    assert_eq!(
        reporter.take(),
        vec![Reported::Success(
            "Deleted the Product from the Catalog".to_string()
        )]
    );
    remote.verify();
}

#[tokio::test]
async fn failed_delete_leaves_the_row_in_place() {
    let mock = MockRemote::new();
    mock.expect_products(10, 0).return_ok(vec![widget("p1", 5)]);
    mock.expect_cart_items().return_ok(vec![]);
    mock.expect_delete_product("p1")
        .return_failure("Delete failed", "Delete failed: referenced by open order");
    let (mut controller, remote, reporter) = system(mock);
    controller.load().await;

    controller.delete_product(&ProductId::new("p1")).await;
    assert!(controller.catalog().get(&ProductId::new("p1")).is_some());
    assert_eq!(
        reporter.take(),
        vec![Reported::ControllerError {
            message: "Delete failed".to_string(),
            detail: "Delete failed: referenced by open order".to_string(),
            context: "delete product".to_string(),
        }]
    );
    remote.verify();
}

#[tokio::test]
async fn add_product_appends_the_echoed_record() {
    let mock = MockRemote::new();
    mock.expect_products(10, 0).return_ok(vec![widget("p1", 5)]);
    mock.expect_cart_items().return_ok(vec![]);
    mock.expect_add_product().return_ok(vec![widget("p9", 7)]);
    let (mut controller, remote, reporter) = system(mock);
    controller.load().await;

    let mut dialog = controller.open_add_dialog();
    dialog.update_field(
        "name",
        catalog_cart::dialog::RawInput::Value("Widget".to_string()),
    );
    dialog.update_field(
        "quantity",
        catalog_cart::dialog::RawInput::Value("7".to_string()),
    );
    let event = dialog.save();
    assert!(dialog.is_done());
    controller.handle_add_event(event).await;

    assert_eq!(controller.catalog().len(), 2);
    assert!(controller.catalog().get(&ProductId::new("p9")).is_some());
    assert_eq!(
        reporter.take(),
        vec![Reported::Success(
            "Added a new Product to the Catalog".to_string()
        )]
    );
    // The backend saw the accumulated field map.
    let drafts: Vec<ProductDraft> = remote.added_drafts();
    let sent = &drafts[0];
    assert_eq!(sent.name.as_deref(), Some("Widget"));
    assert_eq!(sent.quantity, Some(7.0));
    assert_eq!(sent.description, None);
    remote.verify();
}

#[tokio::test]
async fn unsuccessful_page_load_reports_a_controller_error() {
    let mock = MockRemote::new();
    mock.expect_products(10, 0)
        .return_failure("Query failed", "Query failed: row lock");
    mock.expect_cart_items().return_ok(vec![]);
    let (mut controller, remote, reporter) = system(mock);

    controller.load().await;
    assert!(controller.catalog().is_empty());
    assert_eq!(
        reporter.take(),
        vec![Reported::ControllerError {
            message: "Query failed".to_string(),
            detail: "Query failed: row lock".to_string(),
            context: "load products".to_string(),
        }]
    );
    remote.verify();
}

#[tokio::test]
async fn transport_failure_on_page_load_skips_the_cart_fetch() {
    let mock = MockRemote::new();
    mock.expect_products(10, 0)
        .return_transport_error(TransportError::Transport("connection reset".to_string()));
    // Deliberately no cart_items expectation: the mock panics if the
    // controller still tries to fetch the cart after the fatal page load.
    let (mut controller, remote, reporter) = system(mock);

    controller.load().await;
    assert!(controller.catalog().is_empty());
    assert!(controller.cart().is_empty());
    assert!(controller.ledger().is_empty());
    assert_eq!(
        reporter.take(),
        vec![Reported::FatalError {
            context: "load products".to_string(),
        }]
    );
    remote.verify();
}

#[tokio::test]
async fn transport_failure_on_load_is_fatal() {
    let mock = MockRemote::new();
    mock.expect_products(10, 0).return_ok(vec![widget("p1", 5)]);
    mock.expect_cart_items()
        .return_transport_error(TransportError::Transport("connection reset".to_string()));
    let (mut controller, remote, reporter) = system(mock);

    controller.load().await;
    // The page that did arrive is kept; the cart stays empty.
    assert_eq!(controller.catalog().len(), 1);
    assert!(controller.cart().is_empty());
    assert_eq!(
        reporter.take(),
        vec![Reported::FatalError {
            context: "load cart".to_string(),
        }]
    );
    remote.verify();
}
