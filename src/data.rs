// src/data.rs

use crate::model::Catalog;

/// Carga el catálogo de países desde el YAML embebido
pub fn read_catalog_embedded() -> Catalog {
    let file_content = include_str!("data/countries.yaml");
    Catalog::from_yaml_str(file_content).expect("No se pudo parsear el catálogo de países YAML")
}
