//! The privileged commands an operator can start.

use super::admin::ExchangeAdmin;
use super::args::Args;
use super::error::ConsoleError;
use super::session::Session;

/// Reply sent when a command task panics.
pub const PANIC_REPLY: &str = "Console command panicked! Ignoring this to keep the server alive.";

/// Command names accepted on first contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Notify one user, or every user with user id 0
    SendNotif,
    /// Release more units of a stock for sale by the exchange
    AddStocksToExchange,
    /// Overwrite a stock's price
    UpdateStockPrice,
    /// Publish a market event for one stock, or all stocks with stock id 0
    AddMarketEvent,
}

impl Command {
    /// Every command, in the order they are listed to operators.
    pub const ALL: [Command; 4] = [
        Command::SendNotif,
        Command::AddStocksToExchange,
        Command::UpdateStockPrice,
        Command::AddMarketEvent,
    ];

    /// Name the operator types to start the command.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Command::SendNotif => "sendnotif",
            Command::AddStocksToExchange => "add_stocks_to_exchange",
            Command::UpdateStockPrice => "update_stock_price",
            Command::AddMarketEvent => "add_market_event",
        }
    }

    /// Resolve a command from its name, ignoring surrounding whitespace.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    /// Run the command's dialogue to completion.
    ///
    /// # Errors
    ///
    /// Any [`ConsoleError`] ends the command early; the dispatcher reports it
    /// to the operator.
    pub async fn run(
        self,
        session: &mut Session,
        admin: &dyn ExchangeAdmin,
    ) -> Result<String, ConsoleError> {
        match self {
            Command::SendNotif => send_notification(session, admin).await,
            Command::AddStocksToExchange => add_stocks_to_exchange(session, admin).await,
            Command::UpdateStockPrice => update_stock_price(session, admin).await,
            Command::AddMarketEvent => add_market_event(session, admin).await,
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How a command ended, as seen by the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Finished; the message is the terminal reply
    Ok(String),
    /// Failed; the message describes the failure
    Error(String),
}

impl CommandOutcome {
    /// Text sent back to the operator.
    #[must_use]
    pub fn reply(&self) -> String {
        match self {
            CommandOutcome::Ok(message) => message.clone(),
            CommandOutcome::Error(message) => format!("Error: '{message}'"),
        }
    }
}

impl From<Result<String, ConsoleError>> for CommandOutcome {
    fn from(result: Result<String, ConsoleError>) -> Self {
        match result {
            Ok(message) => CommandOutcome::Ok(message),
            Err(err) => CommandOutcome::Error(err.to_string()),
        }
    }
}

/// Ask a yes/no question; only an answer starting with `Y` confirms.
async fn confirm(session: &mut Session, question: String) -> Result<bool, ConsoleError> {
    let answer = session.ask(question).await?;
    Ok(Args::new(&answer).next_char()? == 'Y')
}

async fn send_notification(
    session: &mut Session,
    admin: &dyn ExchangeAdmin,
) -> Result<String, ConsoleError> {
    let line = session.ask("Enter userId and notification text:").await?;
    let mut args = Args::new(&line);
    let user_id = args.next_u32()?;
    let text = args.next_quoted()?;

    let is_global = user_id == 0;
    let question = if is_global {
        format!("Are you sure you want to send '{text}' to ALL users? [Y/N]")
    } else {
        let user = admin.user(user_id)?;
        format!(
            "Are you sure you want to send '{text}' to {} (userid: {})? [Y/N]",
            user.name, user.id
        )
    };

    if !confirm(session, question).await? {
        return Ok("Not sending".to_string());
    }
    admin.send_notification(user_id, &text, is_global)?;
    Ok("Sent".to_string())
}

async fn add_stocks_to_exchange(
    session: &mut Session,
    admin: &dyn ExchangeAdmin,
) -> Result<String, ConsoleError> {
    let line = session.ask("Enter stock id and number of new stocks:").await?;
    let mut args = Args::new(&line);
    let stock_id = args.next_u32()?;
    let new_stocks = args.next_u32()?;

    let stock = admin.stock(stock_id)?;
    let question = format!(
        "Are you sure you want to add {new_stocks} new stocks to exchange for {}? [Y/N]",
        stock.full_name
    );

    if !confirm(session, question).await? {
        return Ok("Not doing".to_string());
    }
    admin.add_stocks_to_exchange(stock_id, new_stocks)?;
    Ok("Done".to_string())
}

async fn update_stock_price(
    session: &mut Session,
    admin: &dyn ExchangeAdmin,
) -> Result<String, ConsoleError> {
    let line = session.ask("Enter stockId and new price:").await?;
    let mut args = Args::new(&line);
    let stock_id = args.next_u32()?;
    let new_price = args.next_u32()?;

    let stock = admin.stock(stock_id)?;
    let question = format!(
        "Are you sure you want to update {}'s price to {new_price}? [Y/N]",
        stock.full_name
    );

    if !confirm(session, question).await? {
        return Ok("Not doing".to_string());
    }
    admin.update_stock_price(stock_id, new_price)?;
    Ok("Done".to_string())
}

async fn add_market_event(
    session: &mut Session,
    admin: &dyn ExchangeAdmin,
) -> Result<String, ConsoleError> {
    let line = session.ask("Enter stockId and headline:").await?;
    let mut args = Args::new(&line);
    let stock_id = args.next_u32()?;
    let headline = args.next_quoted()?;

    let line = session.ask("Enter brief text:").await?;
    let text = Args::new(&line).next_quoted()?;

    let is_global = stock_id == 0;
    let question = if is_global {
        format!("Are you sure you want to send '{headline}'[{text}] for ALL stocks? [Y/N]")
    } else {
        let stock = admin.stock(stock_id)?;
        format!(
            "Are you sure you want to send '{headline}'[{text}] for '{}'? [Y/N]",
            stock.full_name
        )
    };

    if !confirm(session, question).await? {
        return Ok("Not doing".to_string());
    }
    admin.add_market_event(stock_id, &headline, &text, is_global)?;
    Ok("Done".to_string())
}
