// Collections
//
// Ordered, type-homogeneous containers of data objects. Members are
// constructed through the element type's standard constructor path, created
// against the page facade, then appended; copies preserve order and share
// nothing mutable with the source.

use std::fmt;

use crate::error::{Error, Result};
use crate::facade::FacadeHandle;
use crate::model::{DataObject, ElementType, FieldValues};

/// Ordered sequence of data objects of one declared element type.
///
/// # Example
///
/// ```ignore
/// use pagemodel_rs::{fields, Collection, RecordingFacade};
///
/// let facade = RecordingFacade::shared();
/// let mut items = Collection::new(&LineItem::ELEMENT, facade);
/// items.add(fields! { "sku" => "A" })?;
/// items.add(fields! { "sku" => "B" })?;
///
/// let copy = items.copy()?;
/// assert_eq!(copy.len(), 2);
/// ```
pub struct Collection {
    element: &'static ElementType,
    facade: FacadeHandle,
    members: Vec<Box<dyn DataObject>>,
}

impl Collection {
    /// Creates an empty collection of the given element type.
    pub fn new(element: &'static ElementType, facade: FacadeHandle) -> Self {
        Self {
            element,
            facade,
            members: Vec::new(),
        }
    }

    /// Creates an empty collection that will broadcast parent updates.
    ///
    /// Refuses element types that do not advertise the parent-update
    /// capability, so a mis-wired collection fails where it is configured
    /// rather than at the first broadcast.
    pub fn notifying(element: &'static ElementType, facade: FacadeHandle) -> Result<Self> {
        if !element.parent_updatable {
            return Err(Error::NotNotifiable {
                element_type: element.name,
            });
        }
        Ok(Self::new(element, facade))
    }

    /// The configured element type.
    pub fn element_type(&self) -> &'static ElementType {
        self.element
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Borrows the member at `index`.
    pub fn get(&self, index: usize) -> Option<&dyn DataObject> {
        self.members.get(index).map(|member| member.as_ref())
    }

    /// Mutably borrows the member at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut (dyn DataObject + 'static)> {
        self.members.get_mut(index).map(|member| member.as_mut())
    }

    /// Iterates members in order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn DataObject> {
        self.members.iter().map(|member| member.as_ref())
    }

    /// Constructs one element from `values`, runs its create lifecycle
    /// call, then appends it.
    ///
    /// A create failure propagates to the caller and the element is not
    /// appended.
    pub fn add(&mut self, values: FieldValues) -> Result<()> {
        let mut member = (self.element.construct)(self.facade.clone(), values)?;
        member.create()?;
        tracing::debug!(
            element_type = self.element.name,
            members = self.members.len() + 1,
            "appended collection element"
        );
        self.members.push(member);
        Ok(())
    }

    /// Deep copy: a new collection of the same element type and facade,
    /// holding copies of the members in original order.
    pub fn copy(&self) -> Result<Collection> {
        tracing::debug!(
            element_type = self.element.name,
            members = self.members.len(),
            "copying collection"
        );
        let mut members = Vec::with_capacity(self.members.len());
        for member in &self.members {
            members.push(member.deep_copy()?);
        }
        Ok(Collection {
            element: self.element,
            facade: self.facade.clone(),
            members,
        })
    }

    /// Broadcasts the same update payload to every member, in order.
    ///
    /// Guarded by the element type's parent-update capability; a member
    /// whose hook still fails surfaces that error unmodified.
    pub fn notify_members(&mut self, updates: &FieldValues) -> Result<()> {
        if !self.element.parent_updatable {
            return Err(Error::NotNotifiable {
                element_type: self.element.name,
            });
        }
        tracing::debug!(
            element_type = self.element.name,
            members = self.members.len(),
            "broadcasting parent update"
        );
        for member in &mut self.members {
            member.update_from_parent(updates)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Collection<{}>[{}]", self.element.name, self.members.len())
    }
}
