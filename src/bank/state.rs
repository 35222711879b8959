//! The `State` module owns the accounts and applies scripted commands to them in order.
use std::{collections::HashMap, fmt};

use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::bank::{Account, AccountId, Command, CommandType, WithdrawalError};

/// Width of a section rule, in columns.
const SECTION_WIDTH: usize = 37;

/// The visible outcome of a command, rendered one line per report.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// A dashed rule, optionally with a heading centred in it.
    Section(Option<String>),
    /// A snapshot of an account's balance.
    Balance { account: AccountId, line: String },
    /// A withdrawal was applied.
    Withdrawn(AccountId),
    /// A withdrawal was refused and the balance left unchanged.
    Refused {
        account: AccountId,
        reason: WithdrawalError,
    },
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Section(Some(label)) => {
                write!(f, "{:-^width$}", format!(" {label} "), width = SECTION_WIDTH)
            }
            Report::Section(None) => write!(f, "{}", "-".repeat(SECTION_WIDTH)),
            Report::Balance { line, .. } => f.write_str(line),
            Report::Withdrawn(_) => f.write_str("Amount Withdrawn!"),
            Report::Refused { reason, .. } => write!(f, "{reason}"),
        }
    }
}

/// Errors from commands that cannot be applied to the ledger at all.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Account {0} does not exist")]
    UnknownAccount(AccountId),
    #[error("Account {0} already exists")]
    AccountExists(AccountId),
    #[error("Command `{op}` is missing the `{field}` column")]
    MissingField {
        op: &'static str,
        field: &'static str,
    },
}

/// Represents the state of the ledger, including all accounts.
pub struct State {
    /// A map of account IDs to their respective accounts.
    accounts: HashMap<AccountId, Account>,
    /// A channel receiver for incoming commands.
    receiver: mpsc::Receiver<Command>,
}

impl State {
    /// Creates a new instance of `State` with an empty accounts map.
    pub fn new(receiver: mpsc::Receiver<Command>) -> Self {
        State {
            accounts: HashMap::new(),
            receiver,
        }
    }

    /// Retrieves an account by ID.
    pub fn get_account(&self, account_id: AccountId) -> Option<&Account> {
        self.accounts.get(&account_id)
    }

    /// Retrieves all accounts in the state.
    pub fn get_all_accounts(&self) -> &HashMap<AccountId, Account> {
        &self.accounts
    }

    fn get_account_mut(&mut self, account_id: AccountId) -> Result<&mut Account, LedgerError> {
        self.accounts
            .get_mut(&account_id)
            .ok_or(LedgerError::UnknownAccount(account_id))
    }

    /// Applies a command, returning the report it produces, if any.
    pub fn process_command(&mut self, command: Command) -> Result<Option<Report>, LedgerError> {
        match command.get_type() {
            CommandType::Open => {
                let account_id = command.require_account()?;
                let kind = command.require_kind()?;
                let balance = command.require_amount()?;
                if self.accounts.contains_key(&account_id) {
                    return Err(LedgerError::AccountExists(account_id));
                }
                self.accounts
                    .insert(account_id, Account::new(account_id, kind, balance));
                debug!(account = account_id, ?kind, balance, "account opened");
                Ok(None)
            }
            CommandType::Deposit => {
                let amount = command.require_amount()?;
                let account = self.get_account_mut(command.require_account()?)?;
                account.deposit(amount);
                debug!(account = account.id(), amount, "deposit applied");
                Ok(None)
            }
            CommandType::Withdraw => {
                let amount = command.require_amount()?;
                let account = self.get_account_mut(command.require_account()?)?;
                let account_id = account.id();
                match account.withdraw(amount) {
                    Ok(()) => {
                        debug!(account = account_id, amount, "withdrawal applied");
                        Ok(Some(Report::Withdrawn(account_id)))
                    }
                    Err(reason) => {
                        debug!(account = account_id, amount, %reason, "withdrawal refused");
                        Ok(Some(Report::Refused {
                            account: account_id,
                            reason,
                        }))
                    }
                }
            }
            CommandType::Display => {
                let account_id = command.require_account()?;
                let account = self
                    .get_account(account_id)
                    .ok_or(LedgerError::UnknownAccount(account_id))?;
                Ok(Some(Report::Balance {
                    account: account_id,
                    line: account.to_string(),
                }))
            }
            CommandType::Section => Ok(Some(Report::Section(
                command.get_label().map(str::to_owned),
            ))),
        }
    }

    /// Runs the command loop, sending every report to `reports` until the command channel closes.
    pub async fn run(&mut self, reports: mpsc::Sender<Report>) {
        while let Some(command) = self.receiver.recv().await {
            match self.process_command(command) {
                Ok(Some(report)) => {
                    if reports.send(report).await.is_err() {
                        warn!("report receiver dropped, stopping ledger");
                        break;
                    }
                }
                Ok(None) => {}
                Err(err) => error!(%err, "error processing command"),
            }
        }
    }
}
