use log::trace;

use crate::{
    ast::{
        declarations::{ConstDecl, VarDecl},
        list::AstList,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// `const-decls ::= { 'const' const-def { ',' const-def } ';' }`
///
/// Every block's definitions are spliced onto the ones before it, so the
/// result holds all constants in source order.
pub fn parse_const_decls(parser: &mut Parser) -> Result<AstList<ConstDecl>, Error> {
    let mut decls = AstList::empty();

    if parser.current_token_kind() != TokenKind::Const {
        return Ok(decls);
    }

    parser.advance()?;
    decls.push(parse_const_def(parser)?);
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance()?;
        decls.push(parse_const_def(parser)?);
    }
    expect_block_end(parser)?;

    decls.splice(parse_const_decls(parser)?);
    Ok(decls)
}

/// `const-def ::= ident '=' number`
///
/// Unlike a factor, a constant's value takes no sign.
pub fn parse_const_def(parser: &mut Parser) -> Result<ConstDecl, Error> {
    let identifier = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Equals)?;

    let value = parser.expect(TokenKind::Number)?.value.unwrap_or_default();
    let name = identifier.text.unwrap_or_default();
    trace!("constant {} declared at {}", name, identifier.position);

    Ok(ConstDecl {
        name,
        value,
        position: identifier.position,
    })
}

/// `var-decls ::= { 'var' ident { ',' ident } ';' }`
pub fn parse_var_decls(parser: &mut Parser) -> Result<AstList<VarDecl>, Error> {
    let mut decls = AstList::empty();

    if parser.current_token_kind() != TokenKind::Var {
        return Ok(decls);
    }

    parser.advance()?;
    decls.push(parse_var_def(parser)?);
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance()?;
        decls.push(parse_var_def(parser)?);
    }
    expect_block_end(parser)?;

    decls.splice(parse_var_decls(parser)?);
    Ok(decls)
}

fn parse_var_def(parser: &mut Parser) -> Result<VarDecl, Error> {
    let identifier = parser.expect(TokenKind::Identifier)?;
    let name = identifier.text.unwrap_or_default();
    trace!("variable {} declared at {}", name, identifier.position);

    Ok(VarDecl {
        name,
        position: identifier.position,
    })
}

// A declaration list either continues with `,` or closes with `;`
fn expect_block_end(parser: &mut Parser) -> Result<(), Error> {
    if parser.current_token_kind() != TokenKind::Semicolon {
        return Err(parser.unexpected(&[TokenKind::Comma, TokenKind::Semicolon]));
    }

    parser.advance()?;
    Ok(())
}
