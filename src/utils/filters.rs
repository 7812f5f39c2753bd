//! Constructor de filtros SQL
//! 
//! Guarda una lista ordenada de predicados con su parámetro y la vuelca en un
//! `QueryBuilder`: el primero va tras `WHERE` y el resto tras `AND`. Ningún
//! llamador concatena condiciones a mano.

use sqlx::{QueryBuilder, Sqlite};

/// Valor ligado a un predicado
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Integer(i64),
    Text(String),
    Bool(bool),
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Integer(value)
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

#[derive(Debug, Clone)]
struct Predicate {
    /// Lado izquierdo con el operador, p. ej. `s.route_id = `
    lhs: &'static str,
    value: FilterValue,
}

#[derive(Debug, Clone, Default)]
pub struct FilterBuilder {
    predicates: Vec<Predicate>,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Añadir `lhs ?` con su valor
    pub fn eq(mut self, column: &'static str, value: impl Into<FilterValue>) -> Self {
        self.predicates.push(Predicate {
            lhs: column,
            value: value.into(),
        });
        self
    }

    /// Igual que `eq` pero sólo si hay valor
    pub fn eq_opt<V: Into<FilterValue>>(self, column: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.eq(column, value),
            None => self,
        }
    }

    /// Volcar los predicados en el `QueryBuilder` con parámetros ligados
    pub fn apply(self, query: &mut QueryBuilder<'_, Sqlite>) {
        for (i, predicate) in self.predicates.into_iter().enumerate() {
            query.push(if i == 0 { " WHERE " } else { " AND " });
            query.push(predicate.lhs);
            match predicate.value {
                FilterValue::Integer(v) => {
                    query.push_bind(v);
                }
                FilterValue::Text(v) => {
                    query.push_bind(v);
                }
                FilterValue::Bool(v) => {
                    query.push_bind(v);
                }
            }
        }
    }
}
