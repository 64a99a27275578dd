// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The single application state object and the reducer that mutates it.
//!
//! Callers own an [`AppState`] and feed it one [`Action`] at a time through
//! [`reduce`]. An action either applies completely or returns an error and
//! leaves the state exactly as it was.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calc::allocation::{allocate, total_percentage};
use crate::calc::fx::{RateTable, default_currency};
use crate::calc::within_range;
use crate::error::{CalcError, CalcResult};
use crate::models::{
    CategoryBudgets, Currency, Frequency, IncomeAllocation, NewTransaction, RecurringTransaction,
    SavingsGoal, Transaction, TransactionType,
};
use crate::utils::new_id;

const DEFAULT_CATEGORIES: &[&str] = &[
    "Shopping",
    "Transport",
    "Food",
    "Electronics",
    "Entertainment",
    "Health",
    "Education",
    "Bills",
    "Salary",
    "Other",
];

const DEFAULT_STORES: &[&str] = &["Nike Store", "Apple Store", "Uber", "Grocery Store"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub categories: Vec<String>,
    pub stores: Vec<String>,
    pub currency: Currency,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            stores: DEFAULT_STORES.iter().map(|s| s.to_string()).collect(),
            currency: default_currency(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetState {
    pub income_allocations: Vec<IncomeAllocation>,
    pub savings_goals: Vec<SavingsGoal>,
    pub recurring_transactions: Vec<RecurringTransaction>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Newest first.
    pub transactions: Vec<Transaction>,
    pub category_budgets: CategoryBudgets,
    pub budget: BudgetState,
    pub settings: Settings,
    pub fx_rates: RateTable,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            category_budgets: CategoryBudgets::default(),
            budget: BudgetState::default(),
            settings: Settings::default(),
            fx_rates: RateTable::builtin(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewSavingsGoal {
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub target_date: NaiveDate,
    pub category: String,
}

#[derive(Debug, Clone)]
pub struct NewRecurring {
    pub r#type: TransactionType,
    pub amount: Decimal,
    pub category: String,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub enum Action {
    AddIncomeAllocation {
        category: String,
        amount: Decimal,
        percentage: Decimal,
    },
    UpdateIncomeAllocation(IncomeAllocation),
    RemoveIncomeAllocation(String),
    RecomputeAllocations {
        total_income: Decimal,
    },
    AddSavingsGoal(NewSavingsGoal),
    UpdateSavingsGoal(SavingsGoal),
    RemoveSavingsGoal(String),
    ContributeToGoal {
        id: String,
        amount: Decimal,
    },
    AddRecurringTransaction(NewRecurring),
    UpdateRecurringTransaction(RecurringTransaction),
    RemoveRecurringTransaction(String),
    ReplaceCategoryBudget {
        category: String,
        amount: Decimal,
        month: String,
    },
    AddToCategoryBudget {
        category: String,
        amount: Decimal,
        month: String,
    },
    AddTransaction(NewTransaction),
    SetCurrency(Currency),
    SetRate {
        from: String,
        to: String,
        rate: Decimal,
    },
    AddCategory(String),
    DeleteCategory(String),
    AddStore(String),
    DeleteStore(String),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddIncomeAllocation { .. } => "add_income_allocation",
            Action::UpdateIncomeAllocation(_) => "update_income_allocation",
            Action::RemoveIncomeAllocation(_) => "remove_income_allocation",
            Action::RecomputeAllocations { .. } => "recompute_allocations",
            Action::AddSavingsGoal(_) => "add_savings_goal",
            Action::UpdateSavingsGoal(_) => "update_savings_goal",
            Action::RemoveSavingsGoal(_) => "remove_savings_goal",
            Action::ContributeToGoal { .. } => "contribute_to_goal",
            Action::AddRecurringTransaction(_) => "add_recurring_transaction",
            Action::UpdateRecurringTransaction(_) => "update_recurring_transaction",
            Action::RemoveRecurringTransaction(_) => "remove_recurring_transaction",
            Action::ReplaceCategoryBudget { .. } => "replace_category_budget",
            Action::AddToCategoryBudget { .. } => "add_to_category_budget",
            Action::AddTransaction(_) => "add_transaction",
            Action::SetCurrency(_) => "set_currency",
            Action::SetRate { .. } => "set_rate",
            Action::AddCategory(_) => "add_category",
            Action::DeleteCategory(_) => "delete_category",
            Action::AddStore(_) => "add_store",
            Action::DeleteStore(_) => "delete_store",
        }
    }
}

/// Apply one action to `state`.
pub fn reduce(state: &mut AppState, action: Action) -> CalcResult<()> {
    let name = action.name();
    debug!(action = name, "dispatch");
    match action {
        Action::AddIncomeAllocation {
            category,
            amount,
            percentage,
        } => {
            check_percentage(percentage)?;
            if total_percentage(&state.budget.income_allocations) + percentage
                > Decimal::ONE_HUNDRED
            {
                return Err(CalcError::validation(
                    "total allocation percentage cannot exceed 100%",
                ));
            }
            state.budget.income_allocations.push(IncomeAllocation {
                id: new_id(),
                category,
                amount,
                percentage,
            });
        }
        Action::UpdateIncomeAllocation(updated) => {
            check_percentage(updated.percentage)?;
            let others: Decimal = state
                .budget
                .income_allocations
                .iter()
                .filter(|a| a.id != updated.id)
                .map(|a| a.percentage)
                .sum();
            if others + updated.percentage > Decimal::ONE_HUNDRED {
                return Err(CalcError::validation(
                    "total allocation percentage cannot exceed 100%",
                ));
            }
            replace_by_id(&mut state.budget.income_allocations, updated, |a| &a.id);
        }
        Action::RemoveIncomeAllocation(id) => {
            state.budget.income_allocations.retain(|a| a.id != id);
        }
        Action::RecomputeAllocations { total_income } => {
            state.budget.income_allocations =
                allocate(total_income, &state.budget.income_allocations)?;
        }
        Action::AddSavingsGoal(goal) => {
            check_goal(goal.target_amount, goal.current_amount)?;
            state.budget.savings_goals.push(SavingsGoal {
                id: new_id(),
                name: goal.name,
                target_amount: goal.target_amount,
                current_amount: goal.current_amount,
                target_date: goal.target_date,
                category: goal.category,
            });
        }
        Action::UpdateSavingsGoal(goal) => {
            check_goal(goal.target_amount, goal.current_amount)?;
            replace_by_id(&mut state.budget.savings_goals, goal, |g| &g.id);
        }
        Action::RemoveSavingsGoal(id) => {
            state.budget.savings_goals.retain(|g| g.id != id);
        }
        Action::ContributeToGoal { id, amount } => {
            let goal = state
                .budget
                .savings_goals
                .iter_mut()
                .find(|g| g.id == id)
                .ok_or_else(|| CalcError::validation(format!("no savings goal with id {}", id)))?;
            let next = goal
                .current_amount
                .checked_add(amount)
                .ok_or_else(CalcError::out_of_range)?;
            if next < Decimal::ZERO {
                return Err(CalcError::validation(
                    "savings balance cannot go below zero",
                ));
            }
            check_range(next)?;
            goal.current_amount = next;
        }
        Action::AddRecurringTransaction(item) => {
            check_recurring(item.amount, item.start_date, item.end_date)?;
            state
                .budget
                .recurring_transactions
                .push(RecurringTransaction {
                    id: new_id(),
                    r#type: item.r#type,
                    amount: item.amount,
                    category: item.category,
                    frequency: item.frequency,
                    start_date: item.start_date,
                    end_date: item.end_date,
                });
        }
        Action::UpdateRecurringTransaction(item) => {
            check_recurring(item.amount, item.start_date, item.end_date)?;
            replace_by_id(&mut state.budget.recurring_transactions, item, |t| &t.id);
        }
        Action::RemoveRecurringTransaction(id) => {
            state.budget.recurring_transactions.retain(|t| t.id != id);
        }
        Action::ReplaceCategoryBudget {
            category,
            amount,
            month,
        } => {
            check_range(amount)?;
            state
                .category_budgets
                .replace_budget(&category, amount, &month);
        }
        Action::AddToCategoryBudget {
            category,
            amount,
            month,
        } => {
            check_range(amount)?;
            state
                .category_budgets
                .add_to_budget(&category, amount, &month)?;
        }
        Action::AddTransaction(new) => {
            if new.amount <= Decimal::ZERO {
                return Err(CalcError::validation(
                    "transaction amount must be greater than zero",
                ));
            }
            check_range(new.amount)?;
            let display = state.settings.currency.clone();
            let amount = state.fx_rates.convert(new.amount, &new.currency, &display)?;
            state.transactions.insert(
                0,
                Transaction {
                    id: new_id(),
                    r#type: new.r#type,
                    amount,
                    original_amount: new.amount,
                    currency: display,
                    original_currency: new.currency,
                    category: new.category,
                    store: new.store,
                    date: new.date,
                    note: new.note,
                },
            );
        }
        Action::SetCurrency(currency) => {
            let converted = state
                .fx_rates
                .convert_transactions(&state.transactions, &currency)?;
            info!(
                from = %state.settings.currency.code,
                to = %currency.code,
                count = converted.len(),
                "display currency changed"
            );
            state.transactions = converted;
            state.settings.currency = currency;
        }
        Action::SetRate { from, to, rate } => {
            if rate <= Decimal::ZERO {
                return Err(CalcError::validation("exchange rate must be positive"));
            }
            check_range(rate)?;
            state.fx_rates.set_rate(&from, &to, rate);
        }
        Action::AddCategory(name) => push_unique(&mut state.settings.categories, name),
        Action::DeleteCategory(name) => state.settings.categories.retain(|c| *c != name),
        Action::AddStore(name) => push_unique(&mut state.settings.stores, name),
        Action::DeleteStore(name) => state.settings.stores.retain(|s| *s != name),
    }
    Ok(())
}

fn check_percentage(p: Decimal) -> CalcResult<()> {
    if p < Decimal::ZERO || p > Decimal::ONE_HUNDRED {
        return Err(CalcError::validation(format!(
            "percentage {} must be between 0 and 100",
            p
        )));
    }
    Ok(())
}

fn check_goal(target: Decimal, current: Decimal) -> CalcResult<()> {
    if target <= Decimal::ZERO {
        return Err(CalcError::validation(
            "savings target must be greater than zero",
        ));
    }
    if current < Decimal::ZERO {
        return Err(CalcError::validation("saved amount cannot be negative"));
    }
    check_range(target)?;
    check_range(current)
}

fn check_recurring(amount: Decimal, start: NaiveDate, end: Option<NaiveDate>) -> CalcResult<()> {
    if amount <= Decimal::ZERO {
        return Err(CalcError::validation(
            "recurring amount must be greater than zero",
        ));
    }
    check_range(amount)?;
    if let Some(end) = end {
        if end < start {
            return Err(CalcError::validation(format!(
                "end date {} is before start date {}",
                end, start
            )));
        }
    }
    Ok(())
}

fn check_range(amount: Decimal) -> CalcResult<()> {
    if within_range(amount) {
        Ok(())
    } else {
        Err(CalcError::out_of_range())
    }
}

// Unknown ids are ignored.
fn replace_by_id<T>(items: &mut [T], updated: T, id: impl Fn(&T) -> &String) {
    if let Some(pos) = items.iter().position(|i| id(i) == id(&updated)) {
        items[pos] = updated;
    }
}

fn push_unique(list: &mut Vec<String>, name: String) {
    let name = name.trim().to_string();
    if !name.is_empty() && !list.contains(&name) {
        list.push(name);
    }
}
