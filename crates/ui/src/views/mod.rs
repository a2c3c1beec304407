mod crud;
mod home;
mod kategori;
mod menu;
mod not_found;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use kategori::{KategoriCreateView, KategoriEditView, KategoriListView};
pub use menu::{MenuCreateView, MenuEditView, MenuListView};
pub use not_found::NotFoundView;
