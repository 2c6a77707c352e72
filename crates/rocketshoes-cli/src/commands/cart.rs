//! Cart commands - show and mutate the saved cart
//!
//! `show`, `add`, `remove` and `update` each open the cart store, run at most
//! one operation, and print the resulting cart. Rejections are reported by
//! the store's toast notifier; the process then exits with a failure code.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use rocketshoes_core::domain::ProductId;
use rocketshoes_core::store::{CartHandle, CartOutcome, UpdateProductAmount};
use tracing::info;

use super::{CartSession, CliContext};
use crate::output::{cart_to_json, get_formatter, print_cart, OutputFormatter};

/// Show the cart contents
#[derive(Debug, Args)]
pub struct ShowCommand {}

/// Add one unit of a product
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Product id
    pub product_id: ProductId,
}

/// Remove a product line
#[derive(Debug, Args)]
pub struct RemoveCommand {
    /// Product id
    pub product_id: ProductId,
}

/// Set the amount of a product already in the cart
#[derive(Debug, Args)]
pub struct UpdateCommand {
    /// Product id
    pub product_id: ProductId,
    /// Target amount; values below 1 are ignored
    #[arg(allow_negative_numbers = true)]
    pub amount: i64,
}

impl ShowCommand {
    pub async fn execute(&self, ctx: &CliContext) -> Result<ExitCode> {
        let config = ctx.load_config()?;
        let session = CartSession::open(&config, ctx.format).await?;
        let formatter = get_formatter(ctx.format, ctx.quiet);

        render(&session.provider.use_cart(), formatter.as_ref(), ctx);
        session.close().await;
        Ok(ExitCode::SUCCESS)
    }
}

impl AddCommand {
    pub async fn execute(&self, ctx: &CliContext) -> Result<ExitCode> {
        let id = self.product_id;
        run(ctx, "add", |cart| async move { cart.add_product(id).await }).await
    }
}

impl RemoveCommand {
    pub async fn execute(&self, ctx: &CliContext) -> Result<ExitCode> {
        let id = self.product_id;
        run(ctx, "remove", |cart| async move { cart.remove_product(id).await }).await
    }
}

impl UpdateCommand {
    pub async fn execute(&self, ctx: &CliContext) -> Result<ExitCode> {
        let request = UpdateProductAmount {
            product_id: self.product_id,
            amount: self.amount,
        };
        run(ctx, "update", |cart| async move {
            cart.update_product_amount(request).await
        })
        .await
    }
}

/// Opens the cart, runs one operation and reports its outcome
async fn run<F, Fut>(ctx: &CliContext, operation: &str, op: F) -> Result<ExitCode>
where
    F: FnOnce(CartHandle) -> Fut,
    Fut: std::future::Future<Output = CartOutcome>,
{
    let config = ctx.load_config()?;
    let session = CartSession::open(&config, ctx.format).await?;
    let formatter = get_formatter(ctx.format, ctx.quiet);
    let cart = session.provider.use_cart();

    let outcome = op(cart.clone()).await;
    info!(operation, ?outcome, "Cart operation finished");

    let code = report(&outcome, formatter.as_ref(), ctx);
    if outcome.is_committed() || !ctx.format.is_json() {
        render(&cart, formatter.as_ref(), ctx);
    }

    session.close().await;
    Ok(code)
}

fn report(outcome: &CartOutcome, formatter: &dyn OutputFormatter, ctx: &CliContext) -> ExitCode {
    match outcome {
        CartOutcome::Committed => {
            if !ctx.format.is_json() {
                formatter.success("Carrinho atualizado");
            }
            ExitCode::SUCCESS
        }
        CartOutcome::Ignored => {
            if ctx.format.is_json() {
                formatter.print_json(&serde_json::json!({ "outcome": "ignored" }));
            } else {
                formatter.warn("Nenhuma alteração feita");
            }
            ExitCode::SUCCESS
        }
        CartOutcome::Rejected(err) => {
            if ctx.format.is_json() {
                formatter.print_json(&serde_json::json!({
                    "outcome": "rejected",
                    "error": err.to_string(),
                }));
            }
            ExitCode::FAILURE
        }
    }
}

fn render(cart: &CartHandle, formatter: &dyn OutputFormatter, ctx: &CliContext) {
    let snapshot = cart.cart();
    if ctx.format.is_json() {
        formatter.print_json(&cart_to_json(&snapshot));
    } else {
        print_cart(&snapshot, formatter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use rocketshoes_core::store::CartError;

    use crate::output::{OutputFormat, QuietFormatter};

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(subcommand)]
        command: Sub,
    }

    #[derive(Debug, clap::Subcommand)]
    enum Sub {
        Add(AddCommand),
        Update(UpdateCommand),
    }

    fn quiet_ctx(format: OutputFormat) -> CliContext {
        CliContext {
            format,
            quiet: true,
            config_path: std::path::PathBuf::from("config.yaml"),
        }
    }

    #[test]
    fn test_report_exit_codes() {
        let formatter = QuietFormatter;
        let rejected =
            CartOutcome::Rejected(CartError::NotInCart(ProductId::new(1).unwrap()));

        for format in [OutputFormat::Human, OutputFormat::Json] {
            let ctx = quiet_ctx(format);
            assert_eq!(report(&CartOutcome::Committed, &formatter, &ctx), ExitCode::SUCCESS);
            assert_eq!(report(&CartOutcome::Ignored, &formatter, &ctx), ExitCode::SUCCESS);
            assert_eq!(report(&rejected, &formatter, &ctx), ExitCode::FAILURE);
        }
    }

    #[test]
    fn test_parses_product_id() {
        let parsed = Harness::try_parse_from(["rocketshoes", "add", "7"]).unwrap();
        match parsed.command {
            Sub::Add(cmd) => assert_eq!(cmd.product_id.get(), 7),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_zero_product_id() {
        assert!(Harness::try_parse_from(["rocketshoes", "add", "0"]).is_err());
    }

    #[test]
    fn test_update_accepts_non_positive_amount() {
        let parsed = Harness::try_parse_from(["rocketshoes", "update", "3", "-2"]).unwrap();
        match parsed.command {
            Sub::Update(cmd) => {
                assert_eq!(cmd.product_id.get(), 3);
                assert_eq!(cmd.amount, -2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
