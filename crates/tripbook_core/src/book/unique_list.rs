//! Master entity collection with business-key uniqueness.
//!
//! # Invariants
//! - No two stored entities are `is_same`.
//! - Iteration order is insertion order; replacement keeps position.
//! - Every failing call leaves the list untouched.

use crate::book::error::{ModelError, ModelResult};
use crate::model::entity::Entity;
use std::rc::Rc;

/// Ordered entity list that rejects business-key duplicates.
#[derive(Debug, Clone)]
pub struct UniqueList<T> {
    items: Vec<Rc<T>>,
}

impl<T> Default for UniqueList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> UniqueList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from plain entities, rejecting business-key duplicates.
    pub fn from_entities(entities: impl IntoIterator<Item = T>) -> ModelResult<Self> {
        let mut list = Self::new();
        for entity in entities {
            list.add(entity)?;
        }
        Ok(list)
    }

    pub fn contains(&self, candidate: &T) -> bool {
        self.items.iter().any(|item| item.is_same(candidate))
    }

    pub fn add(&mut self, entity: T) -> ModelResult<()> {
        if self.contains(&entity) {
            return Err(ModelError::duplicate(&entity));
        }
        self.items.push(Rc::new(entity));
        Ok(())
    }

    /// Removes the entity that is fully equal to `target`.
    pub fn remove(&mut self, target: &T) -> ModelResult<Rc<T>> {
        let position = self.position_of(target)?;
        Ok(self.items.remove(position))
    }

    /// Replaces `target` with `edited` at the same position.
    pub fn set(&mut self, target: &T, edited: T) -> ModelResult<()> {
        let position = self.position_of(target)?;
        if !target.is_same(&edited) && self.contains(&edited) {
            return Err(ModelError::duplicate(&edited));
        }
        self.items[position] = Rc::new(edited);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn as_slice(&self) -> &[Rc<T>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns owned copies in list order.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().map(|item| T::clone(item)).collect()
    }

    fn position_of(&self, target: &T) -> ModelResult<usize> {
        self.items
            .iter()
            .position(|item| item.as_ref() == target)
            .ok_or_else(|| ModelError::not_found(target))
    }
}
