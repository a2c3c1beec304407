use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::model::entity::{Entity, EntityKind};
use crate::model::field::FieldSpec;
use crate::model::form::Form;
use crate::model::ids::RecordId;

/// A category grouping menu items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kategori {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(rename = "kategoriMenu", default)]
    pub name: String,
    /// Expanded references sometimes carry only the name, so this may be absent.
    #[serde(rename = "deskripsi", default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KategoriDraft {
    #[serde(rename = "kategoriMenu")]
    pub name: String,
    #[serde(rename = "deskripsi")]
    pub description: String,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("kategoriMenu", "Kategori Menu", "Contoh: Makanan"),
    FieldSpec::text_area(
        "deskripsi",
        "Deskripsi",
        "Contoh: Kategori untuk makanan utama",
    ),
];

/// Marker for the `kategori` resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KategoriEntity;

impl Entity for KategoriEntity {
    type Record = Kategori;
    type Draft = KategoriDraft;

    const KIND: EntityKind = EntityKind::Kategori;

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn id(record: &Kategori) -> &RecordId {
        &record.id
    }

    fn display_name(record: &Kategori) -> &str {
        &record.name
    }

    fn to_form(record: &Kategori) -> Form {
        Self::empty_form()
            .with("kategoriMenu", record.name.as_str())
            .with("deskripsi", record.description.as_str())
    }

    fn draft_from_form(form: &Form) -> Result<KategoriDraft, FormError> {
        Ok(KategoriDraft {
            name: form.text("kategoriMenu"),
            description: form.text("deskripsi"),
        })
    }

    fn from_draft(id: RecordId, draft: KategoriDraft) -> Kategori {
        Kategori {
            id,
            name: draft.name,
            description: draft.description,
        }
    }

    fn columns() -> &'static [&'static str] {
        &["Kategori Menu", "Deskripsi"]
    }

    fn row(record: &Kategori) -> Vec<String> {
        vec![record.name.clone(), record.description.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_serializes_with_wire_names() {
        let form = KategoriEntity::empty_form()
            .with("kategoriMenu", "Minuman")
            .with("deskripsi", "Kategori untuk minuman");
        let draft = KategoriEntity::draft_from_form(&form).unwrap();
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kategoriMenu": "Minuman",
                "deskripsi": "Kategori untuk minuman"
            })
        );
    }

    #[test]
    fn record_prefills_form() {
        let record: Kategori = serde_json::from_value(serde_json::json!({
            "_id": "9",
            "kategoriMenu": "Makanan",
            "deskripsi": "Makanan utama",
            "__v": 0
        }))
        .unwrap();
        let form = KategoriEntity::to_form(&record);
        assert_eq!(form.value("kategoriMenu"), "Makanan");
        assert_eq!(form.value("deskripsi"), "Makanan utama");
        assert!(form.missing_fields().is_empty());
    }

    #[test]
    fn record_without_name_still_decodes() {
        let record: Kategori =
            serde_json::from_value(serde_json::json!({ "_id": "9", "deskripsi": "Lainnya" }))
                .unwrap();
        assert_eq!(record.name, "");
        assert_eq!(KategoriEntity::row(&record), vec!["", "Lainnya"]);
    }
}
