//! The component file: prop types, default props and the component export.

use std::path::{Path, PathBuf};

use propgen_core::GeneratedFile;
use propgen_spec::ComponentSpec;

use crate::{
    SchemaFacility,
    ast::{Const, Export, Import, JsObject},
    code_file::CodeFile,
    format_default_value,
    prop_types::prop_types_object,
};

/// Default extension for generated component files.
pub const DEFAULT_EXTENSION: &str = "jsx";

/// A `<Component>.<ext>` file declaring `propTypes` and, when any defaults
/// were given, `defaultProps`.
pub struct ComponentFile<'a> {
    spec: &'a ComponentSpec,
    facility: SchemaFacility,
    extension: &'a str,
}

impl<'a> ComponentFile<'a> {
    pub fn new(spec: &'a ComponentSpec) -> Self {
        Self {
            spec,
            facility: SchemaFacility::default(),
            extension: DEFAULT_EXTENSION,
        }
    }

    pub fn with_extension(mut self, extension: &'a str) -> Self {
        self.extension = extension;
        self
    }

    /// File name without directory, e.g. `Button.jsx`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.spec.name, self.extension)
    }

    fn default_props(&self) -> JsObject {
        self.spec
            .defaults
            .iter()
            .fold(JsObject::new(), |obj, (name, value)| {
                obj.raw(name, format_default_value(value))
            })
    }

    fn component(&self) -> JsObject {
        JsObject::new()
            .shorthand("propTypes")
            .shorthand_if(self.spec.has_defaults(), "defaultProps")
    }
}

impl GeneratedFile for ComponentFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name())
    }

    fn render(&self) -> String {
        let mut declarations = vec![Const::object(
            "propTypes",
            prop_types_object(&self.facility, &self.spec.props),
        )];
        if self.spec.has_defaults() {
            declarations.push(Const::object("defaultProps", self.default_props()));
        }
        log::debug!(
            "rendering {} with {} prop(s), {} default(s)",
            self.file_name(),
            self.spec.props.len(),
            self.spec.defaults.len()
        );

        CodeFile::new()
            .import(Import::new(self.facility.binding, self.facility.module))
            .add(declarations.as_slice())
            .add(Const::object(&self.spec.name, self.component()))
            .export(Export::new(&self.spec.name))
            .render()
    }
}
