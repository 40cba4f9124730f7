pub mod bank;
pub mod density;
pub mod error;
pub mod model;
pub mod quadrature;
pub mod report;
pub mod settings;
pub mod source;
pub mod stats;
pub mod utilities;

pub use bank::SampleBank;
pub use density::{gaussian_pdf, gaussian_peak};
pub use error::Error;
pub use model::Model;
pub use quadrature::{integrate, Quadrature};
pub use report::{Histogram, Report};
pub use settings::{Scenario, Settings, SourceSettings};
pub use source::ReferenceSource;
pub use stats::{summarize, Summary};
pub use utilities::interpolate_linear;
