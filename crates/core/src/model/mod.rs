mod entity;
mod field;
mod form;
mod ids;
mod kategori;
mod menu;

pub use entity::{ChoiceOption, Entity, EntityKind};
pub use field::{FieldKind, FieldSpec, NumberHints};
pub use form::{Form, format_number};
pub use ids::RecordId;

pub use kategori::{Kategori, KategoriDraft, KategoriEntity};
pub use menu::{CategoryRef, MenuDraft, MenuEntity, MenuItem};
