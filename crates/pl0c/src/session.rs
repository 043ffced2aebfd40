//! Drives one compilation: read source, lex/parse/emit, write outputs.

use std::fs::File;

use pl0_gen::CodeGenerator;
use pl0_par::Parser;
use pl0_util::Handler;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{CompileError, CompileResult};
use crate::xml;

pub fn compile(config: &Config) -> CompileResult<()> {
    info!(input = %config.input_file.display(), "compiling");

    let source = std::fs::read_to_string(&config.input_file)
        .map_err(|e| CompileError::Read(config.input_file.clone(), e))?;
    debug!(bytes = source.len(), "source read");

    let handler = Handler::new();
    let output = File::create(&config.output_file)
        .map_err(|e| CompileError::Write(config.output_file.clone(), e))?;
    let mut gen = CodeGenerator::new(output).map_err(pl0_par::ParseError::from)?;

    let mut parser = Parser::new(&source, &handler, &mut gen, config.emit_ast);
    parser.parse_program()?;

    let tree = parser.into_tree();
    gen.into_inner().map_err(pl0_par::ParseError::from)?;

    if let (Some(ast_path), Some(tree)) = (&config.ast_file, &tree) {
        let xml = xml::render(tree);
        std::fs::write(ast_path, xml).map_err(|e| CompileError::Write(ast_path.clone(), e))?;
        debug!(path = %ast_path.display(), "ast dump written");
    }

    let error_count = handler.error_count();
    if error_count > 0 {
        return Err(CompileError::CompilationFailed(error_count));
    }

    info!(output = %config.output_file.display(), "compilation finished");
    Ok(())
}
