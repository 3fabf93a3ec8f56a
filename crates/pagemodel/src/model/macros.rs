// Declarative data-object definitions
//
// Generates the struct, its static schema and element-type descriptor, the
// standard constructor path, and the DataObject plumbing from one field
// declaration list.

/// Declares a data object type.
///
/// Field declarations are `"name": Kind` with an optional leading
/// `required`. Kinds are the [`FieldKind`](crate::model::FieldKind)
/// variants: `Scalar`, `Sequence`, `Mapping`, `Object`, `Collection`,
/// `Handle`.
///
/// Two optional trailing clauses:
///
/// - `defaults = method;` — an associated `fn() -> FieldValues` merged
///   under the constructor's values.
/// - `updates = method;` — an inherent
///   `fn(&mut self, &FieldValues) -> Result<()>` wired up as the parent
///   update hook; also marks the element type as parent-updatable.
///
/// # Example
///
/// ```ignore
/// use pagemodel_rs::{data_object, fields};
/// use pagemodel_rs::error::Result;
/// use pagemodel_rs::model::FieldValues;
///
/// data_object! {
///     /// One line of an order.
///     pub struct LineItem {
///         required "sku": Scalar,
///         "qty": Scalar,
///         "notes": Sequence,
///     }
///     defaults = default_qty;
///     updates = apply_order_fields;
/// }
///
/// impl LineItem {
///     fn default_qty() -> FieldValues {
///         fields! { "qty" => 1 }
///     }
///
///     fn apply_order_fields(&mut self, updates: &FieldValues) -> Result<()> {
///         // merge whatever the owning order broadcasts
///         Ok(())
///     }
/// }
/// ```
#[macro_export]
macro_rules! data_object {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $($req:ident)? $field:literal : $kind:ident ),+ $(,)?
        }
        $( defaults = $defaults:ident ; )?
        $( updates = $updates:ident ; )?
    ) => {
        $(#[$meta])*
        $vis struct $name {
            fields: $crate::model::FieldMap,
            facade: $crate::facade::FacadeHandle,
        }

        impl $name {
            /// Declared field layout for this type.
            pub const SCHEMA: $crate::model::Schema = $crate::model::Schema::new(
                stringify!($name),
                &[
                    $( $crate::model::FieldDecl::new(
                        $field,
                        $crate::model::FieldKind::$kind,
                    ) $( . $req () )? ),+
                ],
            );

            /// Element-type descriptor for collections of this type.
            pub const ELEMENT: $crate::model::ElementType = $crate::model::ElementType {
                name: stringify!($name),
                schema: &Self::SCHEMA,
                parent_updatable: <[()]>::len(&[ $( { let _ = stringify!($updates); } )? ]) == 1,
                construct: Self::construct_boxed,
            };

            /// Builds an instance by merging `values` over the type's
            /// defaults, then running required-field validation.
            pub fn new(
                facade: $crate::facade::FacadeHandle,
                values: $crate::model::FieldValues,
            ) -> $crate::error::Result<Self> {
                let mut fields = $crate::model::FieldMap::new(&Self::SCHEMA);
                $( fields.set_options(Self::$defaults())?; )?
                fields.set_options(values)?;
                fields.validate_required()?;
                Ok(Self { fields, facade })
            }

            fn construct_boxed(
                facade: $crate::facade::FacadeHandle,
                values: $crate::model::FieldValues,
            ) -> $crate::error::Result<Box<dyn $crate::model::DataObject>> {
                Ok(Box::new(Self::new(facade, values)?))
            }
        }

        impl $crate::model::DataObject for $name {
            fn schema(&self) -> &'static $crate::model::Schema {
                &Self::SCHEMA
            }

            fn field_map(&self) -> &$crate::model::FieldMap {
                &self.fields
            }

            fn field_map_mut(&mut self) -> &mut $crate::model::FieldMap {
                &mut self.fields
            }

            fn facade(&self) -> &$crate::facade::FacadeHandle {
                &self.facade
            }

            fn construct(
                &self,
                values: $crate::model::FieldValues,
            ) -> $crate::error::Result<Box<dyn $crate::model::DataObject>> {
                Self::construct_boxed(self.facade.clone(), values)
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            $(
                fn update_from_parent(
                    &mut self,
                    updates: &$crate::model::FieldValues,
                ) -> $crate::error::Result<()> {
                    self.$updates(updates)
                }
            )?
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_struct(stringify!($name)).finish_non_exhaustive()
            }
        }
    };
}
