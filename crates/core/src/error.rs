use thiserror::Error;

/// Client-side form rejections. None of these ever reach the network.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormError {
    /// One or more fields failed the required-field check (holds wire names).
    #[error("Semua field harus diisi!")]
    MissingFields(Vec<&'static str>),

    #[error("{label} harus berupa angka!")]
    InvalidNumber {
        field: &'static str,
        label: &'static str,
    },
}
