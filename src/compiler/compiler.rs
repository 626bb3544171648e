//! Main compiler module.
//!
//! Holds the LLVM context, module and builder, and lowers prototypes and
//! function definitions.

use std::collections::HashMap;

use inkwell::{
    builder::{Builder, BuilderError},
    context::Context,
    module::Module,
    types::BasicMetadataTypeEnum,
    values::{FloatValue, FunctionValue},
};
use thiserror::Error;

use crate::ast::{
    ast::ItemVisitor,
    declarations::{FunctionDef, Item, Prototype},
};

/// Name given to the function wrapping a bare top-level expression.
pub const ANONYMOUS_FUNCTION_NAME: &str = "__anon_expr";

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("unknown variable name {name:?}")]
    UnknownVariable { name: String },
    #[error("unknown function referenced {name:?}")]
    UnknownFunction { name: String },
    #[error("incorrect number of arguments passed to {name:?}: expected {expected}, received {received}")]
    ArgumentCount {
        name: String,
        expected: usize,
        received: usize,
    },
    #[error("function {name:?} cannot be redefined")]
    Redefinition { name: String },
    #[error("invalid binary operator {operator:?}")]
    InvalidOperator { operator: char },
    #[error("call to {name:?} produced no value")]
    NoValue { name: String },
    #[error("function {name:?} failed verification")]
    InvalidFunction { name: String },
    #[error(transparent)]
    Builder(#[from] BuilderError),
}

/// The main compiler structure that holds the state of code generation.
///
/// # Type Parameters
///
/// * `'a` - Lifetime of the LLVM context
pub struct Compiler<'a> {
    /// Parameters of the function currently being lowered
    pub named_values: HashMap<String, FloatValue<'a>>,

    /// Reference to the LLVM context
    pub context: &'a Context,
    /// The LLVM module being built
    pub module: Module<'a>,
    /// The LLVM IR builder
    pub builder: Builder<'a>,
}

impl<'a> Compiler<'a> {
    pub fn new(context: &'a Context, module_name: &str) -> Self {
        Compiler {
            named_values: HashMap::new(),
            module: context.create_module(module_name),
            builder: context.create_builder(),
            context,
        }
    }

    /// Lowers one top-level item, returning the declared or defined function.
    pub fn compile_item(&mut self, item: &Item) -> Result<FunctionValue<'a>, CompileError> {
        let function = item.accept(self)?;
        log::debug!(
            "lowered {}",
            function.get_name().to_str().unwrap_or("<non-utf8>")
        );
        Ok(function)
    }

    /// The whole module as textual IR.
    pub fn print_module(&self) -> String {
        self.module.print_to_string().to_string()
    }

    fn function_name(proto: &Prototype) -> &str {
        if proto.is_anonymous() {
            ANONYMOUS_FUNCTION_NAME
        } else {
            &proto.name
        }
    }

    /// Declares `double name(double...)`, or reuses a matching earlier declaration.
    fn gen_prototype(&mut self, proto: &Prototype) -> Result<FunctionValue<'a>, CompileError> {
        let name = Self::function_name(proto);

        if let Some(existing) = self.module.get_function(name) {
            if existing.count_params() as usize != proto.params.len() {
                return Err(CompileError::ArgumentCount {
                    name: name.to_string(),
                    expected: existing.count_params() as usize,
                    received: proto.params.len(),
                });
            }
            return Ok(existing);
        }

        let f64_type = self.context.f64_type();
        let param_types: Vec<BasicMetadataTypeEnum<'a>> = vec![f64_type.into(); proto.params.len()];
        let fn_type = f64_type.fn_type(&param_types, false);
        let function = self.module.add_function(name, fn_type, None);

        for (param, param_name) in function.get_param_iter().zip(&proto.params) {
            param.into_float_value().set_name(param_name);
        }

        Ok(function)
    }

    fn gen_function(&mut self, definition: &FunctionDef) -> Result<FunctionValue<'a>, CompileError> {
        let name = Self::function_name(&definition.proto);

        // Each bare expression replaces the previous one
        if definition.is_anonymous() {
            if let Some(previous) = self.module.get_function(ANONYMOUS_FUNCTION_NAME) {
                unsafe { previous.delete() };
            }
        }

        let declared_before = self.module.get_function(name).is_some();
        let function = self.gen_prototype(&definition.proto)?;
        if function.count_basic_blocks() > 0 {
            return Err(CompileError::Redefinition {
                name: name.to_string(),
            });
        }

        if let Err(error) = self.gen_body(function, definition) {
            Self::discard(function, declared_before);
            return Err(error);
        }

        Ok(function)
    }

    fn gen_body(
        &mut self,
        function: FunctionValue<'a>,
        definition: &FunctionDef,
    ) -> Result<(), CompileError> {
        let entry = self.context.append_basic_block(function, "entry");
        self.builder.position_at_end(entry);

        self.named_values.clear();
        for (param, param_name) in function.get_param_iter().zip(&definition.proto.params) {
            self.named_values
                .insert(param_name.clone(), param.into_float_value());
        }

        let body = definition.body.accept(self)?;
        self.builder.build_return(Some(&body))?;

        if !function.verify(true) {
            return Err(CompileError::InvalidFunction {
                name: Self::function_name(&definition.proto).to_string(),
            });
        }

        Ok(())
    }

    /// Rolls back a failed definition. A declaration that existed before it,
    /// such as an earlier `extern`, survives with its partial body removed.
    fn discard(function: FunctionValue<'a>, declared_before: bool) {
        if declared_before {
            for block in function.get_basic_blocks() {
                // Only fails for a block without a parent function
                let _ = unsafe { block.delete() };
            }
        } else {
            unsafe { function.delete() };
        }
    }
}

impl<'a> ItemVisitor for Compiler<'a> {
    type ItemOutput = Result<FunctionValue<'a>, CompileError>;

    fn visit_prototype(&mut self, proto: &Prototype) -> Self::ItemOutput {
        self.gen_prototype(proto)
    }

    fn visit_function(&mut self, function: &FunctionDef) -> Self::ItemOutput {
        self.gen_function(function)
    }
}
