//! Data elements and the in-memory data set they are collected into.

use crate::header::{DataElementHeader, HasLength, Header, Length, Tag, VR};
use crate::value::{ConvertValueError, Value};
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};
use std::collections::BTreeMap;
use std::iter::FromIterator;

/// An error which may occur when looking up a DICOM object's attributes.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum AccessError {
    #[snafu(display("No such data element with tag {}", tag))]
    NoSuchDataElementTag { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Could not read value of {}", tag))]
    ConvertValue {
        tag: Tag,
        source: ConvertValueError,
        backtrace: Backtrace,
    },
}

type Result<T, E = AccessError> = std::result::Result<T, E>;

/// An ordered list of data sets, the value of a sequence element.
pub type Sequence = Vec<DataSet>;

/// A decoded data element: its header plus its owned value.
#[derive(Debug, Clone, PartialEq)]
pub struct DataElement {
    header: DataElementHeader,
    value: Value,
}

impl HasLength for DataElement {
    #[inline]
    fn length(&self) -> Length {
        self.header.length()
    }
}

impl Header for DataElement {
    #[inline]
    fn tag(&self) -> Tag {
        self.header.tag()
    }
}

impl DataElement {
    /// Create a data element from the given parts.
    pub fn new(header: DataElementHeader, value: Value) -> Self {
        DataElement { header, value }
    }

    /// Retrieve the element header.
    pub fn header(&self) -> &DataElementHeader {
        &self.header
    }

    /// Retrieve the value representation.
    pub fn vr(&self) -> VR {
        self.header.vr()
    }

    /// Retrieve the data value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Move the data value out of the element, discarding the rest.
    pub fn into_value(self) -> Value {
        self.value
    }
}

/// A nested or top level set of data elements,
/// keyed by tag in ascending order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSet {
    entries: BTreeMap<Tag, DataElement>,
}

impl DataSet {
    /// Create an empty data set.
    pub fn new() -> Self {
        DataSet::default()
    }

    /// Insert a data element, replacing (and returning)
    /// any previous element with the same tag.
    pub fn put(&mut self, element: DataElement) -> Option<DataElement> {
        self.entries.insert(element.tag(), element)
    }

    /// Retrieve a particular element by its tag,
    /// or `None` if it is not present.
    pub fn get(&self, tag: Tag) -> Option<&DataElement> {
        self.entries.get(&tag)
    }

    /// Retrieve a particular element by its tag.
    pub fn element(&self, tag: Tag) -> Result<&DataElement> {
        self.entries.get(&tag).context(NoSuchDataElementTagSnafu { tag })
    }

    /// Remove and return a particular element by its tag.
    pub fn take_element(&mut self, tag: Tag) -> Result<DataElement> {
        self.entries
            .remove(&tag)
            .context(NoSuchDataElementTagSnafu { tag })
    }

    /// Retrieve the trimmed string value of an element.
    pub fn string(&self, tag: Tag) -> Result<String> {
        let element = self.element(tag)?;
        let value = element
            .value()
            .to_str()
            .context(ConvertValueSnafu { tag })?;
        Ok(value.into_owned())
    }

    /// Retrieve the first integer of an element,
    /// parsing integer strings if necessary.
    pub fn int(&self, tag: Tag) -> Result<i64> {
        self.element(tag)?
            .value()
            .to_int()
            .context(ConvertValueSnafu { tag })
    }

    /// Whether an element with this tag is present.
    pub fn contains(&self, tag: Tag) -> bool {
        self.entries.contains_key(&tag)
    }

    /// Iterate over the elements in tag order.
    pub fn iter(&self) -> impl Iterator<Item = &DataElement> {
        self.entries.values()
    }

    /// The number of elements in the data set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the data set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for DataSet {
    type Item = DataElement;
    type IntoIter = std::collections::btree_map::IntoValues<Tag, DataElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

impl FromIterator<DataElement> for DataSet {
    fn from_iter<T: IntoIterator<Item = DataElement>>(iter: T) -> Self {
        let mut set = DataSet::new();
        for element in iter {
            set.put(element);
        }
        set
    }
}
