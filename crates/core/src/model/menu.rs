use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::model::entity::{Entity, EntityKind};
use crate::model::field::{FieldSpec, NumberHints};
use crate::model::form::{Form, format_number};
use crate::model::ids::RecordId;
use crate::model::kategori::Kategori;

/// A menu item's category, as the server chose to send it.
///
/// List endpoints usually expand the reference into the full category while
/// write endpoints echo the bare identifier; both decode here so no screen
/// has to inspect the raw JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Expanded(Kategori),
    Id(RecordId),
}

impl CategoryRef {
    #[must_use]
    pub fn id(&self) -> &RecordId {
        match self {
            Self::Expanded(kategori) => &kategori.id,
            Self::Id(id) => id,
        }
    }

    /// Category name, known only when the server expanded the reference.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Expanded(kategori) => Some(kategori.name.as_str()),
            Self::Id(_) => None,
        }
    }
}

/// A menu row as the server stores it. Only `_id` is required; the server
/// owns the shape, so absent values decode as blanks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(rename = "namaMenu", default)]
    pub name: String,
    #[serde(rename = "harga", default)]
    pub price: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(rename = "kategori_id", default)]
    pub category: Option<CategoryRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuDraft {
    #[serde(rename = "namaMenu")]
    pub name: String,
    #[serde(rename = "harga")]
    pub price: f64,
    pub rating: f64,
    #[serde(rename = "kategori_id")]
    pub category_id: RecordId,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("namaMenu", "Nama Menu", "Contoh: Nasi Goreng"),
    FieldSpec::number("harga", "Harga", "Contoh: 50000", NumberHints::NONE),
    FieldSpec::number(
        "rating",
        "Rating",
        "Contoh: 4.5",
        NumberHints {
            step: Some("0.1"),
            min: Some("0"),
            max: Some("5"),
        },
    ),
    FieldSpec::reference("kategori_id", "Kategori", EntityKind::Kategori, "Pilih Kategori"),
];

/// Marker for the `menu` resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntity;

impl Entity for MenuEntity {
    type Record = MenuItem;
    type Draft = MenuDraft;

    const KIND: EntityKind = EntityKind::Menu;

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn id(record: &MenuItem) -> &RecordId {
        &record.id
    }

    fn display_name(record: &MenuItem) -> &str {
        &record.name
    }

    fn to_form(record: &MenuItem) -> Form {
        let category = record
            .category
            .as_ref()
            .map(|category| category.id().to_string())
            .unwrap_or_default();
        Self::empty_form()
            .with("namaMenu", record.name.as_str())
            .with("harga", format_number(record.price))
            .with("rating", format_number(record.rating))
            .with("kategori_id", category)
    }

    fn draft_from_form(form: &Form) -> Result<MenuDraft, FormError> {
        Ok(MenuDraft {
            name: form.text("namaMenu"),
            price: form.number("harga")?,
            rating: form.number("rating")?,
            category_id: RecordId::new(form.text("kategori_id")),
        })
    }

    fn from_draft(id: RecordId, draft: MenuDraft) -> MenuItem {
        MenuItem {
            id,
            name: draft.name,
            price: draft.price,
            rating: draft.rating,
            category: Some(CategoryRef::Id(draft.category_id)),
        }
    }

    fn columns() -> &'static [&'static str] {
        &["Nama Menu", "Harga", "Rating", "Kategori"]
    }

    fn row(record: &MenuItem) -> Vec<String> {
        vec![
            record.name.clone(),
            format_number(record.price),
            format_number(record.rating),
            record
                .category
                .as_ref()
                .and_then(CategoryRef::name)
                .unwrap_or_default()
                .to_owned(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn nasi_goreng() -> MenuItem {
        serde_json::from_value(json!({
            "_id": "42",
            "namaMenu": "Nasi Goreng",
            "harga": 20000,
            "rating": 4.5,
            "kategori_id": { "_id": "9", "kategoriMenu": "Makanan" }
        }))
        .unwrap()
    }

    #[test]
    fn expanded_category_decodes_as_expanded() {
        let menu = nasi_goreng();
        let category = menu.category.as_ref().unwrap();
        assert!(matches!(category, CategoryRef::Expanded(_)));
        assert_eq!(category.id(), &RecordId::new("9"));
        assert_eq!(category.name(), Some("Makanan"));
    }

    #[test]
    fn plain_category_decodes_as_id() {
        let menu: MenuItem = serde_json::from_value(json!({
            "_id": "43",
            "namaMenu": "Es Teh",
            "harga": 5000,
            "rating": 4,
            "kategori_id": "7"
        }))
        .unwrap();
        assert_eq!(menu.category, Some(CategoryRef::Id(RecordId::new("7"))));
        assert_eq!(MenuEntity::row(&menu)[3], "");
    }

    #[test]
    fn missing_or_null_category_decodes_as_none() {
        let menu: MenuItem = serde_json::from_value(json!({
            "_id": "44",
            "namaMenu": "Kerupuk",
            "harga": 2000,
            "rating": 3,
            "kategori_id": null
        }))
        .unwrap();
        assert_eq!(menu.category, None);
        assert_eq!(MenuEntity::to_form(&menu).value("kategori_id"), "");
    }

    #[test]
    fn partial_record_does_not_fail_the_collection() {
        let menus: Vec<MenuItem> = serde_json::from_value(json!([
            {
                "_id": "1",
                "namaMenu": "Nasi Goreng",
                "harga": 20000,
                "rating": 4.5,
                "kategori_id": "9"
            },
            { "_id": "2", "namaMenu": "Es Teh", "harga": 5000, "kategori_id": "9" }
        ]))
        .unwrap();
        assert_eq!(menus.len(), 2);
        assert_eq!(menus[1].name, "Es Teh");
        assert_eq!(menus[1].rating, 0.0);
    }

    #[test]
    fn expanded_category_without_name_keeps_identifier() {
        let menu: MenuItem = serde_json::from_value(json!({
            "_id": "45",
            "namaMenu": "Soto",
            "harga": 12000,
            "rating": 4,
            "kategori_id": { "_id": "9" }
        }))
        .unwrap();
        let category = menu.category.as_ref().unwrap();
        assert_eq!(category.id(), &RecordId::new("9"));
        assert_eq!(MenuEntity::to_form(&menu).value("kategori_id"), "9");
        assert_eq!(MenuEntity::row(&menu)[3], "");
    }

    #[test]
    fn edit_form_prefills_category_identifier_not_object() {
        let form = MenuEntity::to_form(&nasi_goreng());
        assert_eq!(form.value("namaMenu"), "Nasi Goreng");
        assert_eq!(form.value("harga"), "20000");
        assert_eq!(form.value("rating"), "4.5");
        assert_eq!(form.value("kategori_id"), "9");
    }

    #[test]
    fn row_shows_expanded_category_name() {
        assert_eq!(
            MenuEntity::row(&nasi_goreng()),
            vec!["Nasi Goreng", "20000", "4.5", "Makanan"]
        );
    }

    #[test]
    fn draft_carries_every_form_field() {
        let form = MenuEntity::empty_form()
            .with("namaMenu", "Mie Ayam")
            .with("harga", "15000")
            .with("rating", "4.2")
            .with("kategori_id", "9");
        let draft = MenuEntity::draft_from_form(&form).unwrap();
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({
                "namaMenu": "Mie Ayam",
                "harga": 15000.0,
                "rating": 4.2,
                "kategori_id": "9"
            })
        );
    }

    #[test]
    fn draft_rejects_non_numeric_rating() {
        let form = MenuEntity::empty_form()
            .with("namaMenu", "Mie Ayam")
            .with("harga", "15000")
            .with("rating", "bagus")
            .with("kategori_id", "9");
        assert!(matches!(
            MenuEntity::draft_from_form(&form),
            Err(FormError::InvalidNumber { field: "rating", .. })
        ));
    }
}
