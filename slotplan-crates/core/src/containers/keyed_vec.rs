use std::marker::PhantomData;
use std::ops::Index;
use std::ops::IndexMut;

/// Converts a typed identifier to and from a position in a [`KeyedVec`].
pub trait StorageKey: Copy {
    fn index(&self) -> usize;

    fn create_from_index(index: usize) -> Self;
}

impl StorageKey for usize {
    fn index(&self) -> usize {
        *self
    }

    fn create_from_index(index: usize) -> Self {
        index
    }
}

/// A vector indexed by a typed identifier instead of `usize`; identifiers are handed out by
/// [`KeyedVec::push`] and are dense.
#[derive(Debug, Hash, PartialEq, Eq)]
pub struct KeyedVec<Key, Value> {
    values: Vec<Value>,
    _key: PhantomData<fn() -> Key>,
}

impl<Key, Value> Default for KeyedVec<Key, Value> {
    fn default() -> Self {
        KeyedVec {
            values: Vec::new(),
            _key: PhantomData,
        }
    }
}

impl<Key, Value: Clone> Clone for KeyedVec<Key, Value> {
    fn clone(&self) -> Self {
        KeyedVec {
            values: self.values.clone(),
            _key: PhantomData,
        }
    }
}

impl<Key: StorageKey, Value> KeyedVec<Key, Value> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Appends `value` and returns its key.
    pub fn push(&mut self, value: Value) -> Key {
        let key = Key::create_from_index(self.values.len());
        self.values.push(value);
        key
    }

    pub fn get(&self, key: Key) -> Option<&Value> {
        self.values.get(key.index())
    }

    pub fn keys(&self) -> impl Iterator<Item = Key> {
        (0..self.values.len()).map(Key::create_from_index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// The values in key order, each with its key.
    pub fn iter_keyed(&self) -> impl Iterator<Item = (Key, &Value)> {
        self.keys().zip(self.values.iter())
    }
}

impl<Key: StorageKey, Value: Clone> KeyedVec<Key, Value> {
    /// `len` keys, all mapping to `value`.
    pub fn filled(len: usize, value: Value) -> Self {
        KeyedVec {
            values: vec![value; len],
            _key: PhantomData,
        }
    }
}

impl<Key, Value> FromIterator<Value> for KeyedVec<Key, Value> {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        KeyedVec {
            values: iter.into_iter().collect(),
            _key: PhantomData,
        }
    }
}

impl<Key: StorageKey, Value> Index<Key> for KeyedVec<Key, Value> {
    type Output = Value;

    fn index(&self, key: Key) -> &Value {
        &self.values[key.index()]
    }
}

impl<Key: StorageKey, Value> IndexMut<Key> for KeyedVec<Key, Value> {
    fn index_mut(&mut self, key: Key) -> &mut Value {
        &mut self.values[key.index()]
    }
}
