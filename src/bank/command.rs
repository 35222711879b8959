//! Scripted ledger commands, one per row of a driver script.
use serde::{Deserialize, de};

use crate::bank::{
    AccountKind, LedgerError,
    types::{AccountId, Money, to_money},
};

/// Enum representing the type of command.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    Open,
    Deposit,
    Withdraw,
    Display,
    Section,
}

impl CommandType {
    fn name(self) -> &'static str {
        match self {
            CommandType::Open => "open",
            CommandType::Deposit => "deposit",
            CommandType::Withdraw => "withdraw",
            CommandType::Display => "display",
            CommandType::Section => "section",
        }
    }
}

/// Custom deserializer for monetary values to handle fixed-point representation.
fn deserialize_money<'de, D>(deserializer: D) -> Result<Option<Money>, D::Error>
where
    D: de::Deserializer<'de>,
{
    let value: Option<f64> = Option::deserialize(deserializer)?;
    Ok(value.map(to_money))
}

/// Represents one step of a driver script.
#[derive(Deserialize, Debug, Clone)]
pub struct Command {
    /// The type of command (e.g., Open, Withdraw, etc.)
    op: CommandType,

    /// The account the command applies to, if applicable.
    #[serde(rename = "account")]
    account_id: Option<AccountId>,

    /// The account kind, only used when opening an account.
    kind: Option<AccountKind>,

    /// The amount involved in the command, if applicable.
    #[serde(deserialize_with = "deserialize_money", default)]
    amount: Option<Money>,

    /// Heading text for section commands.
    #[serde(default)]
    label: Option<String>,
}

impl Command {
    /// Creates a command from its raw columns.
    #[cfg(test)]
    pub fn new(
        op: CommandType,
        account_id: Option<AccountId>,
        kind: Option<AccountKind>,
        amount: Option<Money>,
        label: Option<String>,
    ) -> Self {
        Command {
            op,
            account_id,
            kind,
            amount,
            label,
        }
    }

    /// Creates an `open` command.
    #[cfg(test)]
    pub fn open(account_id: AccountId, kind: AccountKind, balance: Money) -> Self {
        Command::new(CommandType::Open, Some(account_id), Some(kind), Some(balance), None)
    }

    /// Creates a `deposit` command.
    #[cfg(test)]
    pub fn deposit(account_id: AccountId, amount: Money) -> Self {
        Command::new(CommandType::Deposit, Some(account_id), None, Some(amount), None)
    }

    /// Creates a `withdraw` command.
    #[cfg(test)]
    pub fn withdraw(account_id: AccountId, amount: Money) -> Self {
        Command::new(CommandType::Withdraw, Some(account_id), None, Some(amount), None)
    }

    /// Creates a `display` command.
    #[cfg(test)]
    pub fn display(account_id: AccountId) -> Self {
        Command::new(CommandType::Display, Some(account_id), None, None, None)
    }

    /// Creates a `section` command with an optional heading.
    #[cfg(test)]
    pub fn section(label: Option<&str>) -> Self {
        Command::new(CommandType::Section, None, None, None, label.map(str::to_owned))
    }

    /// Gets the type of the command.
    pub fn get_type(&self) -> CommandType {
        self.op
    }

    /// Gets the section label, if any.
    pub fn get_label(&self) -> Option<&str> {
        self.label.as_deref().filter(|label| !label.is_empty())
    }

    /// Gets the account ID, or an error naming the missing column.
    pub fn require_account(&self) -> Result<AccountId, LedgerError> {
        self.account_id.ok_or_else(|| self.missing("account"))
    }

    /// Gets the account kind, or an error naming the missing column.
    pub fn require_kind(&self) -> Result<AccountKind, LedgerError> {
        self.kind.ok_or_else(|| self.missing("kind"))
    }

    /// Gets the amount, or an error naming the missing column.
    pub fn require_amount(&self) -> Result<Money, LedgerError> {
        self.amount.ok_or_else(|| self.missing("amount"))
    }

    fn missing(&self, field: &'static str) -> LedgerError {
        LedgerError::MissingField {
            op: self.op.name(),
            field,
        }
    }
}
