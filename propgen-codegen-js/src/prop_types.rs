//! Prop type declarations.

use propgen_codegen::CodeBuilder;
use propgen_spec::PropertySpec;

use crate::{SchemaFacility, ast::JsObject};

/// The validator expression for a prop, e.g. `PropTypes.string.isRequired`.
///
/// `objectOfany` expands to `objectOf(<binding>.any)`; every other tag is
/// used verbatim.
pub fn validator_expr(facility: &SchemaFacility, prop: &PropertySpec) -> String {
    let validator = if prop.is_object_of_any() {
        facility.validator(&format!("objectOf({})", facility.validator("any")))
    } else {
        facility.validator(&prop.type_tag)
    };

    if prop.required {
        format!("{}.isRequired", validator)
    } else {
        validator
    }
}

/// Extension for adding prop declarations to an object literal.
pub trait PropTypesExt {
    /// Add the declaration for one prop, preceded by a lint suppression
    /// comment for `objectOfany`.
    fn prop_type(self, facility: &SchemaFacility, prop: &PropertySpec) -> Self;
}

impl PropTypesExt for JsObject {
    fn prop_type(self, facility: &SchemaFacility, prop: &PropertySpec) -> Self {
        let obj = if prop.is_object_of_any() {
            self.comment(format!(
                "eslint-disable-next-line {}",
                facility.any_object_lint
            ))
        } else {
            self
        };
        obj.raw(&prop.name, validator_expr(facility, prop))
    }
}

/// Build the `propTypes` object, keeping prop order.
pub fn prop_types_object(facility: &SchemaFacility, props: &[PropertySpec]) -> JsObject {
    props
        .iter()
        .fold(JsObject::new(), |obj, prop| obj.prop_type(facility, prop))
}

/// Format one prop as it appears inside the `propTypes` block.
///
/// Lines are indented one level and not newline-terminated.
pub fn format_prop_definition(facility: &SchemaFacility, prop: &PropertySpec) -> String {
    let fragments = JsObject::new().prop_type(facility, prop).member_fragments();

    let mut builder = CodeBuilder::javascript();
    builder.push_indent();
    for fragment in fragments {
        builder.apply_fragment(fragment);
    }

    builder.build().trim_end_matches('\n').to_string()
}
