//! The calculator catalog for Abacus.
//!
//! A [`Catalog`] maps stable ids to [`Calculator`]s. Every calculator takes a
//! loosely typed [`InputRecord`], reports every problem with it through
//! `validate`/`check`, and only computes once the inputs pass.
//!
//! ```
//! use abacus_calculator::{Catalog, CalculatorInputs, InputRecord, InputValue};
//!
//! let catalog = Catalog::builtin();
//! let calculator = catalog.get("debt-to-equity-ratio").unwrap();
//!
//! let record = InputRecord::from([
//!     ("totalDebt".to_string(), InputValue::from(500_000.0)),
//!     ("totalEquity".to_string(), InputValue::from(250_000.0)),
//! ]);
//! let calculation = calculator.calculate(&CalculatorInputs::new(&record)).unwrap();
//! assert_eq!(calculation.result, 2.0);
//! ```

pub mod audit;
pub mod built_in;
pub mod catalog;
pub mod contract;
pub mod error;
pub mod inputs;
pub mod result;
pub mod schema;
pub mod validation;

pub use abacus_types::{InputRecord, InputValue};
pub use audit::{AuditReport, WorkedExample, audit};
pub use catalog::{Catalog, DuplicatePolicy};
pub use contract::{Calculator, CalculatorInfo, Category, Formula};
pub use error::{CalcResult, CalculatorError, CatalogError, FormulaError};
pub use inputs::{CalculatorInputs, FieldReader};
pub use result::{Analysis, Calculation, RiskLevel, round_to};
pub use schema::{FieldKind, FieldSpec, FormSchema};
pub use validation::{FieldError, ValidationReport};
