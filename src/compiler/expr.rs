use inkwell::{
    values::{BasicMetadataValueEnum, FloatValue},
    FloatPredicate,
};

use crate::ast::{
    ast::ExprVisitor,
    expressions::{BinaryExpr, CallExpr, NumberExpr, VariableExpr},
};

use super::compiler::{CompileError, Compiler};

/// Generates LLVM IR for expressions. Every expression yields an `f64`.
impl<'a> ExprVisitor for Compiler<'a> {
    type Output = Result<FloatValue<'a>, CompileError>;

    fn visit_number(&mut self, expr: &NumberExpr) -> Self::Output {
        Ok(self.context.f64_type().const_float(expr.value))
    }

    fn visit_variable(&mut self, expr: &VariableExpr) -> Self::Output {
        self.named_values
            .get(&expr.name)
            .copied()
            .ok_or_else(|| CompileError::UnknownVariable {
                name: expr.name.clone(),
            })
    }

    fn visit_binary(&mut self, expr: &BinaryExpr) -> Self::Output {
        let left = expr.left.accept(self)?;
        let right = expr.right.accept(self)?;

        let value = match expr.operator {
            '+' => self.builder.build_float_add(left, right, "addtmp")?,
            '-' => self.builder.build_float_sub(left, right, "subtmp")?,
            '*' => self.builder.build_float_mul(left, right, "multmp")?,
            '<' => {
                let cmp = self
                    .builder
                    .build_float_compare(FloatPredicate::ULT, left, right, "cmptmp")?;
                // Comparisons produce 0.0 or 1.0
                self.builder
                    .build_unsigned_int_to_float(cmp, self.context.f64_type(), "booltmp")?
            }
            operator => return Err(CompileError::InvalidOperator { operator }),
        };

        Ok(value)
    }

    fn visit_call(&mut self, expr: &CallExpr) -> Self::Output {
        let function = self.module.get_function(&expr.callee).ok_or_else(|| {
            CompileError::UnknownFunction {
                name: expr.callee.clone(),
            }
        })?;

        let expected = function.count_params() as usize;
        if expected != expr.arguments.len() {
            return Err(CompileError::ArgumentCount {
                name: expr.callee.clone(),
                expected,
                received: expr.arguments.len(),
            });
        }

        let mut args: Vec<BasicMetadataValueEnum<'a>> = Vec::with_capacity(expected);
        for argument in &expr.arguments {
            args.push(argument.accept(self)?.into());
        }

        self.builder
            .build_call(function, &args, "calltmp")?
            .try_as_basic_value()
            .left()
            .map(|value| value.into_float_value())
            .ok_or_else(|| CompileError::NoValue {
                name: expr.callee.clone(),
            })
    }
}
