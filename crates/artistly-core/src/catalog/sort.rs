use crate::catalog::criteria::SortOrder;
use crate::domain::Artist;
use std::cmp::Ordering;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Clave de colación: NFKD, sin marcas diacríticas y en minúsculas.
fn collation_key(name: &str) -> String {
  name.nfkd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase).collect()
}

/// Compara nombres sin distinguir mayúsculas ni acentos.
///
/// Dos nombres distintos nunca comparan como `Equal`: los empates de la
/// clave se resuelven con el nombre en minúsculas y luego con el original.
pub fn compare_names(a: &str, b: &str) -> Ordering {
  collation_key(a)
    .cmp(&collation_key(b))
    .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
    .then_with(|| a.cmp(b))
}

/// Ordena in situ por nombre. Es estable: nombres idénticos mantienen el
/// orden de entrada en ambos sentidos.
pub fn sort_by_name(artists: &mut [Artist], order: SortOrder) {
  artists.sort_by(|a, b| {
    let ord = compare_names(&a.name, &b.name);
    match order {
      SortOrder::Asc => ord,
      SortOrder::Desc => ord.reverse(),
    }
  });
}
