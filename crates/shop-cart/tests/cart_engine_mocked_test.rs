use actor_store::mock::MockClient;
use actor_store::FrameworkError;
use async_trait::async_trait;
use rust_decimal::Decimal;
use shop_cart::cart_actor::CartActionResult;
use shop_cart::catalog_actor;
use shop_cart::clients::{CartClient, Catalog, ProductClient, StockCommit};
use shop_cart::engine::CartEngine;
use shop_cart::error::CartError;
use shop_cart::model::{
    Cart, CartId, CartLine, CartRecord, Category, ModelId, Product, ProductCreate,
};

// --- Helpers ---

fn phone() -> Product {
    Product {
        model: "iPhone13".into(),
        category: Category::Smartphone,
        price: Decimal::from(200),
        stock: 5,
    }
}

/// A real catalog actor preloaded with `products`.
async fn live_catalog(products: &[(&str, u32)]) -> ProductClient {
    let (actor, generic) = catalog_actor::new(16);
    tokio::spawn(actor.run(()));
    let client = ProductClient::new(generic);
    for (model, stock) in products {
        client
            .create_product(ProductCreate::new(
                *model,
                Category::Laptop,
                Decimal::from(100),
                *stock,
            ))
            .await
            .unwrap();
    }
    client
}

fn open_record(id: u32, lines: Vec<CartLine>) -> CartRecord {
    let mut cart = Cart::open("ana", Decimal::ZERO);
    cart.products = lines;
    cart.total = cart.lines_total().unwrap();
    CartRecord {
        id: CartId(id),
        cart,
    }
}

fn laptop_line(model: &str, quantity: u32) -> CartLine {
    CartLine::new(model.into(), quantity, Category::Laptop, Decimal::from(100))
}

/// Delegates to a real catalog but refuses to decrement one model.
struct RefusingCatalog {
    inner: ProductClient,
    refuse: ModelId,
}

#[async_trait]
impl Catalog for RefusingCatalog {
    async fn get_by_model(&self, model: &ModelId) -> Result<Option<Product>, FrameworkError> {
        self.inner.get_by_model(model).await
    }

    async fn decrement_stock(
        &self,
        model: &ModelId,
        amount: u32,
    ) -> Result<StockCommit, FrameworkError> {
        if *model == self.refuse {
            return Ok(StockCommit::Insufficient { available: 0 });
        }
        self.inner.decrement_stock(model, amount).await
    }

    async fn restock(&self, model: &ModelId, amount: u32) -> Result<u32, FrameworkError> {
        self.inner.restock(model, amount).await
    }
}

// --- Storage failures ---

/// Pattern: engine over mocked tables. A storage failure reaches the caller unchanged.
#[tokio::test]
async fn test_storage_error_propagates_verbatim() {
    let mut product_mock = MockClient::<Product>::new();
    let mut cart_mock = MockClient::<CartRecord>::new();

    product_mock.expect_get("iPhone13".into()).return_ok(Some(phone()));
    cart_mock
        .expect_find()
        .return_err(FrameworkError::ActorClosed);

    let engine = CartEngine::new(
        CartClient::new(cart_mock.client()),
        ProductClient::new(product_mock.client()),
    );
    let err = engine
        .add_to_cart("ana", &"iPhone13".into())
        .await
        .unwrap_err();

    assert!(matches!(err, CartError::Storage(FrameworkError::ActorClosed)));
    assert_eq!(err.status(), 503);
    product_mock.verify();
    cart_mock.verify();
}

#[tokio::test]
async fn test_unknown_product_never_touches_carts() {
    let mut product_mock = MockClient::<Product>::new();
    let cart_mock = MockClient::<CartRecord>::new();
    product_mock.expect_get("Nokia".into()).return_ok(None);

    let engine = CartEngine::new(
        CartClient::new(cart_mock.client()),
        ProductClient::new(product_mock.client()),
    );
    let err = engine
        .add_to_cart("ana", &"Nokia".into())
        .await
        .unwrap_err();

    assert!(matches!(err, CartError::ProductNotFound(ref m) if m.0 == "Nokia"));
    cart_mock.verify();
}

// --- Checkout compensation ---

/// Pattern: real catalog actor, mocked cart table. Marking paid fails after stock was taken.
#[tokio::test]
async fn test_failed_mark_paid_returns_stock() {
    let catalog = live_catalog(&[("XPS13", 4), ("MacBook", 3)]).await;
    let record = open_record(
        7,
        vec![laptop_line("XPS13", 2), laptop_line("MacBook", 1)],
    );

    let mut cart_mock = MockClient::<CartRecord>::new();
    cart_mock
        .expect_find()
        .return_ok(vec![(CartId(7), record.clone())]);
    cart_mock.expect_get(CartId(7)).return_ok(Some(record));
    cart_mock
        .expect_action(CartId(7))
        .return_err(FrameworkError::ActorDropped);

    let engine = CartEngine::new(CartClient::new(cart_mock.client()), catalog.clone());
    let err = engine.checkout("ana").await.unwrap_err();

    assert!(matches!(err, CartError::Storage(FrameworkError::ActorDropped)));
    assert_eq!(catalog.check_stock(&"XPS13".into()).await.unwrap(), 4);
    assert_eq!(catalog.check_stock(&"MacBook".into()).await.unwrap(), 3);
    cart_mock.verify();
}

/// A decrement refused after validation passed (stock raced away) undoes earlier decrements.
#[tokio::test]
async fn test_refused_decrement_rolls_back_earlier_ones() {
    let catalog = live_catalog(&[("XPS13", 4), ("MacBook", 3)]).await;
    let record = open_record(
        2,
        vec![laptop_line("XPS13", 2), laptop_line("MacBook", 1)],
    );

    let mut cart_mock = MockClient::<CartRecord>::new();
    cart_mock
        .expect_find()
        .return_ok(vec![(CartId(2), record.clone())]);
    cart_mock.expect_get(CartId(2)).return_ok(Some(record));

    let engine = CartEngine::new(
        CartClient::new(cart_mock.client()),
        RefusingCatalog {
            inner: catalog.clone(),
            refuse: "MacBook".into(),
        },
    );
    let err = engine.checkout("ana").await.unwrap_err();

    assert!(matches!(err, CartError::EmptyProductStock(ref m) if m.0 == "MacBook"));
    assert_eq!(catalog.check_stock(&"XPS13".into()).await.unwrap(), 4);
    // No MarkPaid was sent.
    cart_mock.verify();
}

#[tokio::test]
async fn test_successful_checkout_sends_mark_paid_once() {
    let catalog = live_catalog(&[("XPS13", 4)]).await;
    let record = open_record(3, vec![laptop_line("XPS13", 2)]);
    let mut paid = record.cart.clone();
    paid.paid = true;

    let mut cart_mock = MockClient::<CartRecord>::new();
    cart_mock
        .expect_find()
        .return_ok(vec![(CartId(3), record.clone())]);
    cart_mock.expect_get(CartId(3)).return_ok(Some(record));
    cart_mock
        .expect_action(CartId(3))
        .return_ok(CartActionResult::Applied(paid));

    let engine = CartEngine::new(CartClient::new(cart_mock.client()), catalog.clone());
    engine.checkout("ana").await.unwrap();

    assert_eq!(catalog.check_stock(&"XPS13".into()).await.unwrap(), 2);
    cart_mock.verify();
}
