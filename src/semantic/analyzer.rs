use crate::{
    ast::{
        ast::{Decl, File, Node, Stat},
        statements::{Block, VariableDecl},
        symbols::Symbols,
    },
    errors::errors::{Error, ErrorImpl},
};

/// A pass that runs over a complete [`File`] once parsing has finished.
pub trait SemanticPass {
    fn analyze(&mut self, file: &mut File) -> Result<(), Error>;
}

/// The default pass, see the [module documentation](super).
#[derive(Debug, Default)]
pub struct SemanticAnalyzer {
    function_depth: usize,
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        SemanticAnalyzer::default()
    }

    fn node(&mut self, symbols: &Symbols, node: &Node) -> Result<(), Error> {
        match node {
            Node::Decl(decl) => self.decl(symbols, decl),
            Node::Stat(stat) => self.stat(symbols, stat),
        }
    }

    fn decl(&mut self, symbols: &Symbols, decl: &Decl) -> Result<(), Error> {
        match decl {
            Decl::Variable(decl) => check_typed(symbols, decl),
            Decl::Struct(decl) => match symbols.struct_type(decl.struct_type) {
                Some(struct_type) => struct_type
                    .members
                    .iter()
                    .try_for_each(|member| check_typed(symbols, member)),
                None => Ok(()),
            },
            Decl::Function(decl) => {
                let function = symbols.function(decl.function);
                for parameter in &function.parameters {
                    if symbols.variable(parameter.variable).ty.is_none() {
                        return Err(missing_type(symbols, parameter));
                    }
                }

                if let Some(body) = &function.body {
                    self.function_depth += 1;
                    let result = self.block(symbols, body);
                    self.function_depth -= 1;
                    result?;
                }
                Ok(())
            }
        }
    }

    fn stat(&mut self, symbols: &Symbols, stat: &Stat) -> Result<(), Error> {
        match stat {
            Stat::Return(stat) if self.function_depth == 0 => Err(Error::new(
                ErrorImpl::ReturnOutsideFunction,
                stat.span.start.clone(),
            )),
            Stat::Block(stat) => self.block(symbols, &stat.block),
            Stat::Return(_) | Stat::Call(_) => Ok(()),
        }
    }

    fn block(&mut self, symbols: &Symbols, block: &Block) -> Result<(), Error> {
        for node in &block.nodes {
            self.node(symbols, node)?;
        }
        Ok(())
    }
}

impl SemanticPass for SemanticAnalyzer {
    fn analyze(&mut self, file: &mut File) -> Result<(), Error> {
        log::debug!("analyzing {} top-level nodes of {}", file.nodes.len(), file.name);

        self.function_depth = 0;
        for node in &file.nodes {
            self.node(&file.symbols, node)?;
        }
        Ok(())
    }
}

/// Without a type the declaration needs an initializer to infer it from.
fn check_typed(symbols: &Symbols, decl: &VariableDecl) -> Result<(), Error> {
    if symbols.variable(decl.variable).ty.is_none() && decl.assignment.is_none() {
        return Err(missing_type(symbols, decl));
    }
    Ok(())
}

fn missing_type(symbols: &Symbols, decl: &VariableDecl) -> Error {
    Error::new(
        ErrorImpl::MissingType {
            name: symbols.variable(decl.variable).name.clone(),
        },
        decl.span.start.clone(),
    )
}
