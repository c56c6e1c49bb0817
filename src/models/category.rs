//! Loan category model
//!
//! Categories group loan and overdraft accounts on the report. The rules that
//! assign them and the labels that describe them are static tables so they can
//! be reviewed (and extended) as product codes change.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width every category label is padded to on the report
pub const LABEL_WIDTH: usize = 16;

/// Report category of a loan or overdraft account
///
/// Variant order is the order categories appear on the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LoanCategory {
    #[serde(rename = "OD")]
    Overdraft,
    #[serde(rename = "TL")]
    TermLoan,
    #[serde(rename = "HP")]
    HirePurchase,
    #[serde(rename = "RC")]
    RevolvingCredit,
}

impl LoanCategory {
    /// All categories in report order
    pub fn all() -> &'static [LoanCategory] {
        &[
            Self::Overdraft,
            Self::TermLoan,
            Self::HirePurchase,
            Self::RevolvingCredit,
        ]
    }

    /// Two-letter category code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Overdraft => "OD",
            Self::TermLoan => "TL",
            Self::HirePurchase => "HP",
            Self::RevolvingCredit => "RC",
        }
    }

    /// Display label from the label table
    pub fn label(&self) -> &'static str {
        CATEGORY_LABELS
            .iter()
            .find(|(category, _)| category == self)
            .map(|(_, label)| *label)
            .unwrap_or_default()
    }

    /// Label right-padded to the fixed display width
    pub fn padded_label(&self) -> String {
        format!("{:<width$}", self.label(), width = LABEL_WIDTH)
    }
}

impl fmt::Display for LoanCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for LoanCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "OD" => Ok(Self::Overdraft),
            "TL" => Ok(Self::TermLoan),
            "HP" => Ok(Self::HirePurchase),
            "RC" => Ok(Self::RevolvingCredit),
            _ => Err(format!("Unknown loan category: {}", s)),
        }
    }
}

/// Category code to display label
pub const CATEGORY_LABELS: [(LoanCategory, &str); 4] = [
    (LoanCategory::Overdraft, "OVERDRAFT"),
    (LoanCategory::TermLoan, "TERM LOAN"),
    (LoanCategory::HirePurchase, "HIRE PURCHASE"),
    (LoanCategory::RevolvingCredit, "REVOLVING CREDIT"),
];

/// How a rule constrains the product code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductMatch {
    /// Product code must be one of these
    In(&'static [u16]),
    /// Product code must not be one of these (a missing code qualifies)
    NotIn(&'static [u16]),
    /// Any product code, including a missing one
    Any,
}

impl ProductMatch {
    pub fn matches(&self, product_code: Option<u16>) -> bool {
        match self {
            Self::In(codes) => product_code.is_some_and(|code| codes.contains(&code)),
            Self::NotIn(codes) => product_code.map_or(true, |code| !codes.contains(&code)),
            Self::Any => true,
        }
    }
}

/// One categorization rule: account type plus product constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    pub account_type: &'static str,
    pub products: ProductMatch,
    pub category: LoanCategory,
}

impl CategoryRule {
    pub fn matches(&self, account_type: &str, product_code: Option<u16>) -> bool {
        account_type.trim().eq_ignore_ascii_case(self.account_type)
            && self.products.matches(product_code)
    }
}

pub const EXCLUDED_OD_PRODUCTS: &[u16] = &[107, 173];

pub const REVOLVING_CREDIT_PRODUCTS: &[u16] =
    &[302, 350, 364, 365, 506, 902, 903, 910, 925, 951];

pub const HIRE_PURCHASE_PRODUCTS: &[u16] = &[128, 130, 131, 132, 380, 381, 700, 705, 720, 725];

/// Categorization rules, evaluated in order; the first match wins
pub const CATEGORY_RULES: [CategoryRule; 4] = [
    CategoryRule {
        account_type: "OD",
        products: ProductMatch::NotIn(EXCLUDED_OD_PRODUCTS),
        category: LoanCategory::Overdraft,
    },
    CategoryRule {
        account_type: "LN",
        products: ProductMatch::In(REVOLVING_CREDIT_PRODUCTS),
        category: LoanCategory::RevolvingCredit,
    },
    CategoryRule {
        account_type: "LN",
        products: ProductMatch::In(HIRE_PURCHASE_PRODUCTS),
        category: LoanCategory::HirePurchase,
    },
    CategoryRule {
        account_type: "LN",
        products: ProductMatch::Any,
        category: LoanCategory::TermLoan,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_order() {
        let mut categories = vec![
            LoanCategory::RevolvingCredit,
            LoanCategory::HirePurchase,
            LoanCategory::Overdraft,
            LoanCategory::TermLoan,
        ];
        categories.sort();
        assert_eq!(categories, LoanCategory::all());
    }

    #[test]
    fn test_labels_are_padded() {
        for category in LoanCategory::all() {
            assert_eq!(category.padded_label().len(), LABEL_WIDTH);
            assert!(category.padded_label().starts_with(category.label()));
        }
        assert_eq!(LoanCategory::TermLoan.padded_label(), "TERM LOAN       ");
        assert_eq!(LoanCategory::RevolvingCredit.padded_label(), "REVOLVING CREDIT");
    }

    #[test]
    fn test_code_round_trip() {
        for category in LoanCategory::all() {
            assert_eq!(category.code().parse::<LoanCategory>().unwrap(), *category);
        }
        assert!("XX".parse::<LoanCategory>().is_err());
    }

    #[test]
    fn test_product_match() {
        assert!(ProductMatch::NotIn(EXCLUDED_OD_PRODUCTS).matches(None));
        assert!(!ProductMatch::NotIn(EXCLUDED_OD_PRODUCTS).matches(Some(107)));
        assert!(!ProductMatch::In(HIRE_PURCHASE_PRODUCTS).matches(None));
        assert!(ProductMatch::In(HIRE_PURCHASE_PRODUCTS).matches(Some(720)));
    }
}
