pub mod category;
pub mod draft;
pub mod form_state;
pub mod loaders;
pub mod question;

pub use category::{Categories, CategoriesResponse, CategoryChoice, CategoryId, CategoryOption};
pub use draft::QuestionDraft;
pub use form_state::{Field, FormState, FormView};
pub use loaders::{load_all_drafts, load_draft};
pub use question::{Difficulty, NewQuestion, QuestionCreated};
