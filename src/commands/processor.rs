//! Command Processor
//!
//! Runs one command at a time against a session's order. `create-order` is
//! all-or-nothing; `update-order` applies each entry independently and
//! reports the ones it could not apply.

use serde_json::json;

use super::checkout;
use super::models::{
    BrowseInput, Command, CommandOutput, CreateOrderInput, ItemSpec, UpdateOrderInput,
};
use super::render;
use crate::cart::models::OrderType;
use crate::cart::pricing::{unknown_toppings, DELIVERY_FEE, EXTRA_TOPPING_PRICE, TAX_RATE};
use crate::cart::store::{checked_quantity, ItemRequest, Order};
use crate::catalog::Catalog;
use crate::error::{OrderError, Problem};
use crate::ui::presenter::CHECKOUT_STEP;
use crate::ui::{Confirmer, Presenter, UiEvent};

/// Everything a command may touch, passed explicitly for the duration of one call.
pub struct Session<'a> {
    catalog: &'a Catalog,
    order: &'a mut Order,
    presenter: &'a dyn Presenter,
    confirmer: &'a dyn Confirmer,
}

impl<'a> Session<'a> {
    pub fn new(
        catalog: &'a Catalog,
        order: &'a mut Order,
        presenter: &'a dyn Presenter,
        confirmer: &'a dyn Confirmer,
    ) -> Self {
        Self {
            catalog,
            order,
            presenter,
            confirmer,
        }
    }

    pub async fn execute(&mut self, command: Command) -> Result<CommandOutput, OrderError> {
        let name = command.name();
        let result = match command {
            Command::Browse(input) => Ok(self.browse(&input)),
            Command::CreateOrder(input) => self.create_order(&input),
            Command::UpdateOrder(input) => self.update_order(&input),
            Command::Checkout(input) => {
                checkout::finalize(self.order, input, self.presenter, self.confirmer).await
            }
        };

        match &result {
            Ok(_) => tracing::info!(command = name, items = self.order.items().len(), "command applied"),
            Err(e) => tracing::warn!(command = name, kind = e.kind(), error = %e, "command rejected"),
        }
        result
    }

    fn browse(&self, input: &BrowseInput) -> CommandOutput {
        self.presenter.notify(UiEvent::ShowWorking {
            agent_name: input.name.clone(),
        });

        let catalog = self.catalog;
        let categories: Vec<_> = catalog
            .categories()
            .iter()
            .map(|c| {
                json!({
                    "id": c.id,
                    "name": c.name,
                    "badge": c.badge,
                    "products": catalog.products_by_category(&c.id).collect::<Vec<_>>(),
                })
            })
            .collect();

        CommandOutput {
            summary: render::menu_markdown(catalog),
            structured: json!({
                "store": catalog.store(),
                "categories": categories,
                "sizes": catalog.sizes(),
                "crusts": catalog.crusts(),
                "toppings": catalog.list_toppings(),
                "pricing": {
                    "extraTopping": EXTRA_TOPPING_PRICE,
                    "deliveryFee": DELIVERY_FEE,
                    "taxRate": TAX_RATE,
                },
            }),
        }
    }

    fn create_order(&mut self, input: &CreateOrderInput) -> Result<CommandOutput, OrderError> {
        let address = input.address.as_deref().map(str::trim).filter(|a| !a.is_empty());
        if input.order_type == OrderType::Delivery && address.is_none() {
            return Err(OrderError::validation(
                "address",
                "a delivery address is required for delivery orders",
            ));
        }
        if input.items.is_empty() {
            return Err(OrderError::validation("items", "at least one item is required"));
        }

        let requests = self.validate_items(&input.items)?;

        // Build on a staged copy and swap it in, so a failure leaves the old one intact.
        let mut staged = self.order.clone();
        staged.reset();
        staged.set_fulfillment(input.order_type, address)?;
        for request in &requests {
            staged.add_item(self.catalog, request)?;
        }
        *self.order = staged;

        self.presenter.notify(UiEvent::HideWorking);
        self.presenter.notify(UiEvent::AdvanceToStep {
            step: CHECKOUT_STEP,
        });

        Ok(CommandOutput {
            summary: render::order_created(self.order),
            structured: json!({ "cart": self.order.snapshot() }),
        })
    }

    /// Checks every item up front. Unknown ids win over bad quantities.
    fn validate_items(&self, items: &[ItemSpec]) -> Result<Vec<ItemRequest>, OrderError> {
        let mut missing = Vec::new();
        let mut invalid = Vec::new();
        let mut requests = Vec::with_capacity(items.len());

        for (index, spec) in items.iter().enumerate() {
            let entry = format!("items[{index}]");
            match self.check_item(spec) {
                Ok(request) => requests.push(request),
                Err(OrderError::NotFound(problems)) => {
                    missing.extend(relabel(problems, &entry));
                }
                Err(other) => invalid.extend(entry_problems(other, &entry)),
            }
        }

        if !missing.is_empty() {
            return Err(OrderError::NotFound(missing));
        }
        if !invalid.is_empty() {
            return Err(OrderError::Validation(invalid));
        }
        Ok(requests)
    }

    fn check_item(&self, spec: &ItemSpec) -> Result<ItemRequest, OrderError> {
        let product = self.catalog.lookup_product(&spec.product_id).ok_or_else(|| {
            OrderError::not_found("productId", format!("product \"{}\" not found", spec.product_id))
        })?;

        let selection = spec.selection();
        if product.customizable {
            let unknown = unknown_toppings(self.catalog, &selection);
            if !unknown.is_empty() {
                return Err(OrderError::not_found(
                    "toppings",
                    format!("unknown topping(s): {}", unknown.join(", ")),
                ));
            }
        }

        let quantity = checked_quantity(spec.quantity)?;

        Ok(ItemRequest::new(&spec.product_id, quantity).with_selection(selection))
    }

    fn update_order(&mut self, input: &UpdateOrderInput) -> Result<CommandOutput, OrderError> {
        if self.order.is_placed() {
            return Err(OrderError::OrderPlaced);
        }
        if self.order.is_empty() && input.add.is_empty() {
            return Err(OrderError::EmptyCart(
                "No items to add. Use create-order to build an order first.".to_string(),
            ));
        }

        let mut changes = Vec::new();
        let mut errors = Vec::new();

        for (index, cart_id) in input.remove.iter().enumerate() {
            match self.order.remove_item(cart_id) {
                Ok(item) => changes.push(format!("Removed {} (`{cart_id}`)", item.name())),
                Err(e) => errors.extend(entry_problems(e, &format!("remove[{index}]"))),
            }
        }

        for (index, change) in input.change_quantity.iter().enumerate() {
            match self.order.set_quantity(&change.cart_id, change.quantity) {
                Ok(previous) => {
                    let name = self
                        .order
                        .item(&change.cart_id)
                        .map(|i| i.name().to_string())
                        .unwrap_or_default();
                    changes.push(format!(
                        "Changed {name} (`{}`) quantity: {previous} → {}",
                        change.cart_id, change.quantity
                    ));
                }
                Err(e) => errors.extend(entry_problems(e, &format!("changeQuantity[{index}]"))),
            }
        }

        for (index, spec) in input.add.iter().enumerate() {
            let entry = format!("add[{index}]");
            let added = self
                .check_item(spec)
                .and_then(|request| self.order.add_item(self.catalog, &request));
            match added {
                Ok(added) => {
                    let line = self.order.item(&added.cart_id);
                    let name = line.map(|i| i.name().to_string()).unwrap_or_default();
                    let options = line
                        .and_then(|i| i.description())
                        .map(|d| format!(" ({d})"))
                        .unwrap_or_default();
                    let merged = if added.merged { ", merged" } else { "" };
                    changes.push(format!(
                        "Added {}x {name}{options} (`{}`{merged})",
                        spec.quantity, added.cart_id
                    ));
                }
                Err(e) => errors.extend(entry_problems(e, &entry)),
            }
        }

        self.presenter.notify(UiEvent::RenderCart);

        Ok(CommandOutput {
            summary: render::order_updated(&changes, &errors, self.order),
            structured: json!({
                "changes": changes,
                "errors": errors,
                "cart": self.order.snapshot(),
            }),
        })
    }
}

fn relabel(problems: Vec<Problem>, entry: &str) -> impl Iterator<Item = Problem> + '_ {
    problems
        .into_iter()
        .map(move |p| Problem::new(entry, p.message))
}

/// Flattens an error into problems attributed to one request entry.
fn entry_problems(error: OrderError, entry: &str) -> Vec<Problem> {
    match error {
        OrderError::Validation(problems) => problems
            .into_iter()
            .map(|p| Problem::new(entry, format!("{} {}", p.entry, p.message)))
            .collect(),
        OrderError::NotFound(problems) => relabel(problems, entry).collect(),
        other => vec![Problem::new(entry, other.to_string())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::models::{CheckoutInput, QuantityChange};
    use crate::ui::{AutoConfirm, ConfirmationRequest, RecordingPresenter};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingConfirmer {
        calls: AtomicUsize,
        approve: bool,
    }

    impl CountingConfirmer {
        fn new(approve: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                approve,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Confirmer for CountingConfirmer {
        async fn confirm(&self, _request: &ConfirmationRequest) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.approve
        }
    }

    fn spec(product_id: &str, quantity: i64) -> ItemSpec {
        ItemSpec {
            product_id: product_id.into(),
            quantity,
            size: None,
            crust: None,
            toppings: None,
        }
    }

    fn create(items: Vec<ItemSpec>) -> Command {
        Command::CreateOrder(CreateOrderInput {
            order_type: OrderType::Delivery,
            address: Some("16011 NE 36th Way".into()),
            items,
        })
    }

    fn contact() -> CheckoutInput {
        CheckoutInput {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            phone: "425-555-0100".into(),
            email: "grace@example.com".into(),
            ..CheckoutInput::default()
        }
    }

    async fn run(
        catalog: &Catalog,
        order: &mut Order,
        confirmer: &dyn Confirmer,
        command: Command,
    ) -> (Result<CommandOutput, OrderError>, Vec<UiEvent>) {
        let presenter = RecordingPresenter::new();
        let result = Session::new(catalog, order, &presenter, confirmer)
            .execute(command)
            .await;
        (result, presenter.take())
    }

    #[tokio::test]
    async fn test_browse_is_read_only() {
        let catalog = Catalog::checkers().unwrap();
        let mut order = Order::new();

        let (result, events) = run(
            &catalog,
            &mut order,
            &AutoConfirm::approve(),
            Command::Browse(BrowseInput { name: "Copilot".into() }),
        )
        .await;

        let output = result.unwrap();
        assert_eq!(order, Order::new());
        assert_eq!(
            events,
            vec![UiEvent::ShowWorking { agent_name: "Copilot".into() }]
        );
        assert_eq!(output.structured["categories"][0]["id"], "build-your-own");
        assert_eq!(output.structured["pricing"]["deliveryFee"], "5.99");
    }

    #[tokio::test]
    async fn test_create_order_builds_cart() {
        let catalog = Catalog::checkers().unwrap();
        let mut order = Order::new();
        let pizza = ItemSpec {
            size: Some("large".into()),
            toppings: Some(vec!["pepperoni".into(), "mushrooms".into()]),
            ..spec("pepperoni", 1)
        };

        let (result, events) = run(
            &catalog,
            &mut order,
            &AutoConfirm::approve(),
            create(vec![pizza, spec("coca-cola", 2)]),
        )
        .await;

        let output = result.unwrap();
        assert_eq!(
            events,
            vec![UiEvent::HideWorking, UiEvent::AdvanceToStep { step: 7 }]
        );
        let cart = &output.structured["cart"];
        assert_eq!(cart["items"][0]["lineTotal"], "18.49");
        assert_eq!(cart["items"][1]["quantity"], 2);
        assert_eq!(cart["totals"]["subtotal"], "23.47");
        assert!(output.summary.contains("# Order Created"));
    }

    #[tokio::test]
    async fn test_create_order_replaces_previous_cart() {
        let catalog = Catalog::checkers().unwrap();
        let mut order = Order::new();
        let confirmer = AutoConfirm::approve();

        run(&catalog, &mut order, &confirmer, create(vec![spec("sprite", 1)]))
            .await
            .0
            .unwrap();
        run(&catalog, &mut order, &confirmer, create(vec![spec("lemonade", 1)]))
            .await
            .0
            .unwrap();

        assert_eq!(order.items().len(), 1);
        assert_eq!(order.items()[0].product_id(), "lemonade");
    }

    #[tokio::test]
    async fn test_create_order_with_unknown_product_changes_nothing() {
        let catalog = Catalog::checkers().unwrap();
        let mut order = Order::new();
        let confirmer = AutoConfirm::approve();
        run(&catalog, &mut order, &confirmer, create(vec![spec("cheese", 1)]))
            .await
            .0
            .unwrap();
        let before = order.clone();

        let (result, events) = run(
            &catalog,
            &mut order,
            &confirmer,
            create(vec![spec("sprite", 1), spec("calzone", 1), spec("gyro", 1)]),
        )
        .await;

        let err = result.unwrap_err();
        assert_eq!(err.kind(), "not_found");
        let entries: Vec<&str> = err.problems().iter().map(|p| p.entry.as_str()).collect();
        assert_eq!(entries, vec!["items[1]", "items[2]"]);
        assert_eq!(order, before);
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn test_create_order_validation() {
        let catalog = Catalog::checkers().unwrap();
        let mut order = Order::new();
        let confirmer = AutoConfirm::approve();

        let no_address = Command::CreateOrder(CreateOrderInput {
            order_type: OrderType::Delivery,
            address: Some("  ".into()),
            items: vec![spec("sprite", 1)],
        });
        let err = run(&catalog, &mut order, &confirmer, no_address).await.0.unwrap_err();
        assert_eq!(err.problems()[0].entry, "address");

        let err = run(&catalog, &mut order, &confirmer, create(vec![]))
            .await
            .0
            .unwrap_err();
        assert_eq!(err.problems()[0].entry, "items");

        let err = run(&catalog, &mut order, &confirmer, create(vec![spec("sprite", 0)]))
            .await
            .0
            .unwrap_err();
        assert_eq!(err.kind(), "validation_error");
        assert_eq!(err.problems()[0].entry, "items[0]");
        assert!(order.is_empty());

        let huge = spec("sprite", i64::from(u32::MAX) + 1);
        let err = run(&catalog, &mut order, &confirmer, create(vec![huge]))
            .await
            .0
            .unwrap_err();
        assert_eq!(err.problems()[0].message, "quantity must be at most 4294967295");
        assert!(order.is_empty());
    }

    #[tokio::test]
    async fn test_update_order_on_empty_cart_without_additions() {
        let catalog = Catalog::checkers().unwrap();
        let mut order = Order::new();

        let (result, _) = run(
            &catalog,
            &mut order,
            &AutoConfirm::approve(),
            Command::UpdateOrder(UpdateOrderInput {
                remove: vec!["abcd1234".into()],
                ..UpdateOrderInput::default()
            }),
        )
        .await;

        assert_eq!(result.unwrap_err().kind(), "empty_cart");
    }

    #[tokio::test]
    async fn test_update_order_is_best_effort() {
        let catalog = Catalog::checkers().unwrap();
        let mut order = Order::new();
        let confirmer = AutoConfirm::approve();
        run(&catalog, &mut order, &confirmer, create(vec![spec("cheese", 1)]))
            .await
            .0
            .unwrap();

        let (result, events) = run(
            &catalog,
            &mut order,
            &confirmer,
            Command::UpdateOrder(UpdateOrderInput {
                add: vec![spec("garlic-knots", 1)],
                remove: vec!["deadbeef".into()],
                change_quantity: vec![],
            }),
        )
        .await;

        let output = result.unwrap();
        assert_eq!(events, vec![UiEvent::RenderCart]);
        let errors = output.structured["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["entry"], "remove[0]");
        assert!(errors[0]["message"].as_str().unwrap().contains("deadbeef"));
        assert!(order.items().iter().any(|i| i.product_id() == "garlic-knots"));
        assert_eq!(order.items().len(), 2);
    }

    #[tokio::test]
    async fn test_update_order_applies_removals_then_quantities_then_additions() {
        let catalog = Catalog::checkers().unwrap();
        let mut order = Order::new();
        let confirmer = AutoConfirm::approve();
        run(&catalog, &mut order, &confirmer, create(vec![spec("sprite", 1)]))
            .await
            .0
            .unwrap();
        let sprite_id = order.items()[0].cart_id().to_string();

        // The removal runs first, so the quantity change no longer finds the line,
        // and the re-added sprite becomes a fresh line.
        let (result, _) = run(
            &catalog,
            &mut order,
            &confirmer,
            Command::UpdateOrder(UpdateOrderInput {
                add: vec![spec("sprite", 2)],
                remove: vec![sprite_id.clone()],
                change_quantity: vec![QuantityChange {
                    cart_id: sprite_id.clone(),
                    quantity: 5,
                }],
            }),
        )
        .await;

        let output = result.unwrap();
        let changes: Vec<&str> = output.structured["changes"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|c| c.as_str())
            .collect();
        assert!(changes[0].starts_with("Removed"));
        assert!(changes[1].starts_with("Added 2x"));
        assert_eq!(output.structured["errors"][0]["entry"], "changeQuantity[0]");
        assert_eq!(order.items().len(), 1);
        assert_eq!(order.items()[0].quantity(), 2);
    }

    #[tokio::test]
    async fn test_checkout_with_empty_cart_never_asks() {
        let catalog = Catalog::checkers().unwrap();
        let mut order = Order::new();
        let confirmer = CountingConfirmer::new(true);

        let (result, _) = run(&catalog, &mut order, &confirmer, Command::Checkout(contact())).await;

        assert_eq!(result.unwrap_err().kind(), "empty_cart");
        assert_eq!(confirmer.calls(), 0);
    }

    #[tokio::test]
    async fn test_checkout_invalid_contact_does_not_mutate() {
        let catalog = Catalog::checkers().unwrap();
        let mut order = Order::new();
        let confirmer = CountingConfirmer::new(true);
        run(&catalog, &mut order, &confirmer, create(vec![spec("veggie", 1)]))
            .await
            .0
            .unwrap();
        let before = order.clone();

        let bad = CheckoutInput {
            phone: "12345".into(),
            ..contact()
        };
        let (result, _) = run(&catalog, &mut order, &confirmer, Command::Checkout(bad)).await;

        assert_eq!(result.unwrap_err().problems()[0].entry, "phone");
        assert_eq!(order, before);
        assert_eq!(confirmer.calls(), 0);
    }

    #[tokio::test]
    async fn test_declined_checkout_keeps_cart() {
        let catalog = Catalog::checkers().unwrap();
        let mut order = Order::new();
        let confirmer = CountingConfirmer::new(false);
        run(&catalog, &mut order, &confirmer, create(vec![spec("hawaiian", 2)]))
            .await
            .0
            .unwrap();
        let items_before = order.items().to_vec();
        let totals_before = order.totals();

        let (result, _) = run(&catalog, &mut order, &confirmer, Command::Checkout(contact())).await;

        let output = result.unwrap();
        assert_eq!(output.structured["placed"], false);
        assert_eq!(confirmer.calls(), 1);
        assert_eq!(order.items(), items_before.as_slice());
        assert_eq!(order.totals(), totals_before);
        assert!(!order.is_placed());
        assert_eq!(order.checkout_info().unwrap().first_name, "Grace");
    }

    #[tokio::test]
    async fn test_confirmed_checkout_places_order() {
        let catalog = Catalog::checkers().unwrap();
        let mut order = Order::new();
        let confirmer = CountingConfirmer::new(true);
        run(&catalog, &mut order, &confirmer, create(vec![spec("wings-14pc", 1)]))
            .await
            .0
            .unwrap();

        let (result, events) =
            run(&catalog, &mut order, &confirmer, Command::Checkout(contact())).await;

        let output = result.unwrap();
        assert_eq!(output.structured["placed"], true);
        assert_eq!(output.structured["orderNumber"].as_str().unwrap().len(), 8);
        assert!(order.is_placed());
        assert_eq!(
            events,
            vec![
                UiEvent::AdvanceToStep { step: 7 },
                UiEvent::AdvanceToStep { step: 8 }
            ]
        );

        let again = Command::UpdateOrder(UpdateOrderInput {
            add: vec![spec("sprite", 1)],
            ..UpdateOrderInput::default()
        });
        let err = run(&catalog, &mut order, &confirmer, again).await.0.unwrap_err();
        assert_eq!(err, OrderError::OrderPlaced);

        let err = run(&catalog, &mut order, &confirmer, Command::Checkout(contact()))
            .await
            .0
            .unwrap_err();
        assert_eq!(err, OrderError::OrderPlaced);
        assert_eq!(confirmer.calls(), 1);

        run(&catalog, &mut order, &confirmer, create(vec![spec("sprite", 1)]))
            .await
            .0
            .unwrap();
        assert!(!order.is_placed());
    }
}
