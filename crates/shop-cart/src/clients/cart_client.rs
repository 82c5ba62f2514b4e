//! # Cart Client
//!
//! The cart repository: every primitive the engine builds its workflows from, each one a
//! single request to the cart actor. Lookups return cart headers (no lines);
//! [`CartClient::populate_lines`] attaches them.
//!
//! Storage errors, including refused writes, come back as [`FrameworkError`] unchanged. The
//! client never retries.
use crate::cart_actor::{CartAction, CartActionResult, CartCreate, CartQuery, CartWrite};
use crate::model::{Cart, CartId, CartLine, CartRecord, ModelId};
use actor_store::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info, instrument};

/// Client for interacting with the cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<CartRecord>,
}

#[async_trait]
impl ActorClient<CartRecord> for CartClient {
    type Error = FrameworkError;

    fn inner(&self) -> &ResourceClient<CartRecord> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e
    }
}

fn headers(rows: Vec<(CartId, CartRecord)>) -> Vec<(CartId, Cart)> {
    rows.into_iter()
        .map(|(id, record)| (id, record.cart.header()))
        .collect()
}

impl CartClient {
    pub fn new(inner: ResourceClient<CartRecord>) -> Self {
        Self { inner }
    }

    // --- Lookups ---

    /// The customer's unpaid cart, if any.
    #[instrument(skip(self))]
    pub async fn find_open_cart(
        &self,
        customer: &str,
    ) -> Result<Option<(CartId, Cart)>, FrameworkError> {
        let query = CartQuery::Open {
            customer: customer.to_string(),
        };
        Ok(headers(self.find(query).await?).into_iter().next())
    }

    #[instrument(skip(self))]
    pub async fn find_paid_carts(&self, customer: &str) -> Result<Vec<(CartId, Cart)>, FrameworkError> {
        let query = CartQuery::Paid {
            customer: customer.to_string(),
        };
        Ok(headers(self.find(query).await?))
    }

    /// Every cart of the customer, paid or not.
    #[instrument(skip(self))]
    pub async fn find_customer_carts(
        &self,
        customer: &str,
    ) -> Result<Vec<(CartId, Cart)>, FrameworkError> {
        let query = CartQuery::Customer {
            customer: customer.to_string(),
        };
        Ok(headers(self.find(query).await?))
    }

    #[instrument(skip(self))]
    pub async fn find_all_carts(&self) -> Result<Vec<(CartId, Cart)>, FrameworkError> {
        Ok(headers(self.find(CartQuery::All).await?))
    }

    /// Attaches the stored lines of `cart_id` to `cart`. A cart with no lines keeps an empty
    /// collection; an unknown id is `NotFound`.
    #[instrument(skip(self, cart))]
    pub async fn populate_lines(&self, cart_id: CartId, mut cart: Cart) -> Result<Cart, FrameworkError> {
        let record = self
            .get(cart_id)
            .await?
            .ok_or_else(|| FrameworkError::NotFound(cart_id.to_string()))?;
        cart.products = record.cart.products;
        debug!(lines = cart.products.len(), "Populated");
        Ok(cart)
    }

    // --- Cart rows ---

    #[instrument(skip(self))]
    pub async fn create_cart(
        &self,
        customer: &str,
        initial_total: Decimal,
    ) -> Result<CartId, FrameworkError> {
        self.inner
            .create(CartCreate {
                customer: customer.to_string(),
                initial_total: Some(initial_total),
                lines: Vec::new(),
            })
            .await
    }

    /// Inserts a cart together with its first line. The table sets the total to the line's
    /// subtotal.
    #[instrument(skip(self))]
    pub async fn create_cart_with_line(
        &self,
        customer: &str,
        line: CartLine,
    ) -> Result<CartId, FrameworkError> {
        let id = self
            .inner
            .create(CartCreate {
                customer: customer.to_string(),
                initial_total: None,
                lines: vec![line],
            })
            .await?;
        info!(%id, "Opened cart");
        Ok(id)
    }

    /// Applies `writes` to one cart as a single unit and returns the stored result.
    #[instrument(skip(self))]
    pub async fn apply(&self, cart_id: CartId, writes: Vec<CartWrite>) -> Result<Cart, FrameworkError> {
        match self
            .inner
            .perform_action(cart_id, CartAction::Apply(writes))
            .await?
        {
            CartActionResult::Applied(cart) => Ok(cart),
            other => unreachable!("Apply answered with {other:?}"),
        }
    }

    // --- Single-write primitives ---

    pub async fn insert_line(&self, cart_id: CartId, line: CartLine) -> Result<(), FrameworkError> {
        self.apply(cart_id, vec![CartWrite::InsertLine(line)]).await?;
        Ok(())
    }

    pub async fn adjust_line_quantity(
        &self,
        cart_id: CartId,
        model: ModelId,
        delta: i32,
    ) -> Result<(), FrameworkError> {
        self.apply(cart_id, vec![CartWrite::AdjustLineQuantity { model, delta }])
            .await?;
        Ok(())
    }

    pub async fn delete_line(&self, cart_id: CartId, model: ModelId) -> Result<(), FrameworkError> {
        self.apply(cart_id, vec![CartWrite::DeleteLine(model)]).await?;
        Ok(())
    }

    pub async fn delete_all_lines(&self, cart_id: CartId) -> Result<(), FrameworkError> {
        self.apply(cart_id, vec![CartWrite::DeleteAllLines]).await?;
        Ok(())
    }

    pub async fn adjust_total(&self, cart_id: CartId, delta: Decimal) -> Result<(), FrameworkError> {
        self.apply(cart_id, vec![CartWrite::AdjustTotal(delta)]).await?;
        Ok(())
    }

    pub async fn mark_paid(&self, cart_id: CartId, date: NaiveDate) -> Result<(), FrameworkError> {
        self.apply(cart_id, vec![CartWrite::MarkPaid(date)]).await?;
        Ok(())
    }

    // --- Administrative ---

    /// Removes every line of every cart. Returns the number of lines removed.
    #[instrument(skip(self))]
    pub async fn delete_all_lines_globally(&self) -> Result<usize, FrameworkError> {
        let mut removed = 0;
        for (id, _) in self.find(CartQuery::All).await? {
            match self.inner.perform_action(id, CartAction::Wipe).await? {
                CartActionResult::Wiped { lines } => removed += lines,
                other => unreachable!("Wipe answered with {other:?}"),
            }
        }
        info!(removed, "Deleted all cart lines");
        Ok(removed)
    }

    /// Removes every cart row. Returns the number of carts removed.
    #[instrument(skip(self))]
    pub async fn delete_all_carts(&self) -> Result<usize, FrameworkError> {
        let removed = self.inner.purge().await?;
        info!(removed, "Deleted all carts");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart_actor::CartRecordError;
    use crate::model::Category;
    use actor_store::mock::{
        create_mock_client, expect_action, expect_create, expect_find, MockClient,
    };
    use actor_store::ResourceRequest;
    use tokio::sync::mpsc;

    fn phone_line() -> CartLine {
        CartLine::new("iPhone13".into(), 1, Category::Smartphone, Decimal::from(200))
    }

    /// Receives one `Apply` for `cart_id`, answers it and returns its only write.
    async fn expect_single_write(
        receiver: &mut mpsc::Receiver<ResourceRequest<CartRecord>>,
        cart_id: CartId,
    ) -> CartWrite {
        let (id, action, responder) = expect_action(receiver).await.expect("Expected Action");
        assert_eq!(id, cart_id);
        responder
            .send(Ok(CartActionResult::Applied(Cart::open("ana", Decimal::ZERO))))
            .unwrap();
        match action {
            CartAction::Apply(mut writes) => {
                assert_eq!(writes.len(), 1, "Expected a single write");
                writes.remove(0)
            }
            other => panic!("Expected Apply, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_cart_sends_given_total() {
        let (client, mut receiver) = create_mock_client::<CartRecord>(10);
        let carts = CartClient::new(client);

        let task = tokio::spawn(async move {
            let empty = carts.create_cart("ana", Decimal::from(150)).await?;
            let with_line = carts.create_cart_with_line("bo", phone_line()).await?;
            Ok::<_, FrameworkError>((empty, with_line))
        });

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create");
        assert_eq!(params.customer, "ana");
        assert_eq!(params.initial_total, Some(Decimal::from(150)));
        assert!(params.lines.is_empty());
        responder.send(Ok(CartId(4))).unwrap();

        // The table derives the total from the line.
        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create");
        assert_eq!(params.customer, "bo");
        assert_eq!(params.initial_total, None);
        assert_eq!(params.lines, vec![phone_line()]);
        responder.send(Ok(CartId(5))).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), (CartId(4), CartId(5)));
    }

    #[tokio::test]
    async fn test_line_and_total_primitives() {
        let (client, mut receiver) = create_mock_client::<CartRecord>(10);
        let carts = CartClient::new(client);

        let task = tokio::spawn(async move {
            carts.insert_line(CartId(2), phone_line()).await?;
            carts.delete_line(CartId(2), "iPhone13".into()).await?;
            carts.adjust_total(CartId(2), Decimal::from(-200)).await
        });

        assert_eq!(
            expect_single_write(&mut receiver, CartId(2)).await,
            CartWrite::InsertLine(phone_line())
        );
        assert_eq!(
            expect_single_write(&mut receiver, CartId(2)).await,
            CartWrite::DeleteLine("iPhone13".into())
        );
        assert_eq!(
            expect_single_write(&mut receiver, CartId(2)).await,
            CartWrite::AdjustTotal(Decimal::from(-200))
        );

        assert!(task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_open_cart_lookup_strips_lines() {
        let (client, mut receiver) = create_mock_client::<CartRecord>(10);
        let carts = CartClient::new(client);

        let task = tokio::spawn(async move { carts.find_open_cart("ana").await });

        let (query, responder) = expect_find(&mut receiver).await.expect("Expected Find");
        assert_eq!(
            query,
            CartQuery::Open {
                customer: "ana".to_string()
            }
        );

        let mut cart = Cart::open("ana", Decimal::from(200));
        cart.products.push(phone_line());
        responder
            .send(Ok(vec![(CartId(3), CartRecord { id: CartId(3), cart })]))
            .unwrap();

        let (id, header) = task.await.unwrap().unwrap().expect("open cart");
        assert_eq!(id, CartId(3));
        assert!(header.products.is_empty());
        assert_eq!(header.total, Decimal::from(200));
    }

    #[tokio::test]
    async fn test_single_write_primitives_send_one_batch() {
        let (client, mut receiver) = create_mock_client::<CartRecord>(10);
        let carts = CartClient::new(client);

        let task = tokio::spawn(async move {
            carts
                .adjust_line_quantity(CartId(1), "iPhone13".into(), -1)
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver).await.expect("Expected Action");
        assert_eq!(id, CartId(1));
        match action {
            CartAction::Apply(writes) => assert_eq!(
                writes,
                vec![CartWrite::AdjustLineQuantity {
                    model: "iPhone13".into(),
                    delta: -1
                }]
            ),
            other => panic!("Expected Apply, got {other:?}"),
        }
        responder
            .send(Ok(CartActionResult::Applied(Cart::open("ana", Decimal::ZERO))))
            .unwrap();

        assert!(task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_refused_write_surfaces_verbatim() {
        let mut mock = MockClient::<CartRecord>::new();
        mock.expect_action(CartId(9))
            .return_err(FrameworkError::EntityError(Box::new(
                CartRecordError::AlreadyPaid(CartId(9)),
            )));

        let carts = CartClient::new(mock.client());
        let err = carts.delete_all_lines(CartId(9)).await.unwrap_err();
        assert_eq!(
            err.entity_error::<CartRecordError>(),
            Some(&CartRecordError::AlreadyPaid(CartId(9)))
        );
    }

    #[tokio::test]
    async fn test_populate_unknown_cart_is_not_found() {
        let mut mock = MockClient::<CartRecord>::new();
        mock.expect_get(CartId(5)).return_ok(None);

        let carts = CartClient::new(mock.client());
        let err = carts
            .populate_lines(CartId(5), Cart::open("ana", Decimal::ZERO))
            .await
            .unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(ref id) if id == "cart_5"));
    }
}
