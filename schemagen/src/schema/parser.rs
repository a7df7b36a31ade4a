// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
// SDL parser
//
// Reads the type-system subset of GraphQL SDL into a TypeSchema. Schema
// definitions, directive definitions and directive usages are recognised and
// skipped; descriptions are dropped.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_until, take_while, take_while1},
    character::complete::{char, multispace1, satisfy},
    combinator::{map, not, opt, recognize, value},
    error::{Error as NomError, ErrorKind},
    multi::{many0, separated_list1},
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};

use super::types::{
    EnumType, FieldDefinition, FieldType, InputValueDefinition, NamedType, ObjectKind, ObjectType,
    ScalarType,
};
use super::{TypeSchema, BUILTIN_SCALARS};
use crate::error::{Error, Result};

type PResult<'a, T> = IResult<&'a str, T>;

/// A top-level definition
enum Definition {
    Type(NamedType),
    Extension(NamedType),
    Ignored(&'static str),
}

/// Parse SDL text into a schema
pub fn parse_schema(sdl: &str) -> Result<TypeSchema> {
    let (rest, definitions) = document(sdl).map_err(|e| nom_error(sdl, e))?;
    if !rest.is_empty() {
        return Err(parse_error_at(sdl, rest));
    }

    let mut schema = TypeSchema::new();
    let mut extensions = Vec::new();

    for (start, definition) in definitions {
        match definition {
            Definition::Type(named_type) => {
                let name = named_type.name().to_string();
                if schema.insert(named_type).is_some() && !BUILTIN_SCALARS.contains(&name.as_str()) {
                    return Err(Error::Parse {
                        line: line_of(sdl, start),
                        message: format!("type {} is defined more than once", name),
                    });
                }
            }
            Definition::Extension(named_type) => extensions.push((line_of(sdl, start), named_type)),
            Definition::Ignored(what) => log::debug!("Skipping {} definition", what),
        }
    }

    for (line, extension) in extensions {
        apply_extension(&mut schema, line, extension)?;
    }

    schema.validate_references()?;
    log::debug!("Parsed schema with {} types", schema.len());
    Ok(schema)
}

fn apply_extension(schema: &mut TypeSchema, line: usize, extension: NamedType) -> Result<()> {
    let name = extension.name().to_string();
    match (schema.types.get_mut(&name), extension) {
        (Some(NamedType::Object(target)), NamedType::Object(ext)) => {
            for field in ext.fields.into_values() {
                target.add_field(field);
            }
            for interface in ext.implements {
                if !target.implements.contains(&interface) {
                    target.implements.push(interface);
                }
            }
            for member in ext.members {
                if !target.members.contains(&member) {
                    target.members.push(member);
                }
            }
            Ok(())
        }
        (Some(NamedType::Enum(target)), NamedType::Enum(ext)) => {
            for enum_value in ext.values {
                if !target.values.contains(&enum_value) {
                    target.values.push(enum_value);
                }
            }
            Ok(())
        }
        (Some(NamedType::Scalar(_)), NamedType::Scalar(_)) => Ok(()),
        (Some(_), _) => Err(Error::Parse {
            line,
            message: format!("extension of {} does not match its definition", name),
        }),
        (None, _) => Err(Error::UnknownType(name)),
    }
}

fn line_of(source: &str, rest: &str) -> usize {
    let offset = source.len() - rest.len();
    source[..offset].matches('\n').count() + 1
}

fn parse_error_at(source: &str, rest: &str) -> Error {
    let rest = match ignored(rest) {
        Ok((remaining, _)) => remaining,
        Err(_) => rest,
    };
    let snippet: String = rest.chars().take(40).collect();
    Error::Parse {
        line: line_of(source, rest),
        message: format!("unexpected input near `{}`", snippet.trim_end()),
    }
}

fn nom_error(source: &str, error: nom::Err<NomError<&str>>) -> Error {
    match error {
        nom::Err::Error(e) | nom::Err::Failure(e) => parse_error_at(source, e.input),
        nom::Err::Incomplete(_) => Error::Parse {
            line: source.matches('\n').count() + 1,
            message: "unexpected end of input".to_string(),
        },
    }
}

// ---------------------------------------------------------------------------
// Lexical helpers
// ---------------------------------------------------------------------------

fn comment(input: &str) -> PResult<&str> {
    recognize(pair(char('#'), take_while(|c| c != '\n' && c != '\r')))(input)
}

/// Whitespace, comments and commas
fn ignored(input: &str) -> PResult<()> {
    value((), many0(alt((multispace1, comment, tag(",")))))(input)
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn name(input: &str) -> PResult<&str> {
    preceded(
        ignored,
        recognize(pair(
            satisfy(|c| c.is_ascii_alphabetic() || c == '_'),
            take_while(is_name_char),
        )),
    )(input)
}

fn keyword<'a>(word: &'static str) -> impl FnMut(&'a str) -> PResult<'a, &'a str> {
    preceded(ignored, terminated(tag(word), not(satisfy(is_name_char))))
}

fn punct<'a>(c: char) -> impl FnMut(&'a str) -> PResult<'a, char> {
    preceded(ignored, char(c))
}

fn block_string(input: &str) -> PResult<&str> {
    recognize(delimited(tag("\"\"\""), take_until("\"\"\""), tag("\"\"\"")))(input)
}

fn quoted_string(input: &str) -> PResult<&str> {
    let (rest, _) = char('"')(input)?;
    let mut escaped = false;
    for (i, c) in rest.char_indices() {
        match c {
            '\\' if !escaped => escaped = true,
            '"' if !escaped => {
                let end = i + 2;
                return Ok((&input[end..], &input[..end]));
            }
            '\n' => break,
            _ => escaped = false,
        }
    }
    Err(nom::Err::Error(NomError::new(input, ErrorKind::Char)))
}

fn description(input: &str) -> PResult<&str> {
    preceded(ignored, alt((block_string, quoted_string)))(input)
}

/// Skip a bracketed group, honouring nested brackets, strings and comments
fn balanced<'a>(open: char, close: char) -> impl FnMut(&'a str) -> PResult<'a, &'a str> {
    move |input: &'a str| {
        let (start, _) = ignored(input)?;
        let (mut rest, _) = char(open)(start)?;
        let mut depth = 1usize;
        while depth > 0 {
            if let Ok((after, _)) = alt((block_string, quoted_string, comment))(rest) {
                rest = after;
                continue;
            }
            let mut chars = rest.chars();
            match chars.next() {
                Some(c) if c == open => depth += 1,
                Some(c) if c == close => depth -= 1,
                Some(_) => {}
                None => return Err(nom::Err::Error(NomError::new(start, ErrorKind::Eof))),
            }
            rest = chars.as_str();
        }
        let consumed = start.len() - rest.len();
        Ok((rest, &start[..consumed]))
    }
}

/// Literal text of a default value
fn value_text(input: &str) -> PResult<&str> {
    preceded(
        ignored,
        alt((
            block_string,
            quoted_string,
            balanced('[', ']'),
            balanced('{', '}'),
            recognize(pair(
                opt(char('-')),
                take_while1(|c: char| is_name_char(c) || matches!(c, '.' | '+' | '-')),
            )),
        )),
    )(input)
}

fn directives(input: &str) -> PResult<()> {
    value(
        (),
        many0(pair(punct('@'), pair(name, opt(balanced('(', ')'))))),
    )(input)
}

// ---------------------------------------------------------------------------
// Type references and fields
// ---------------------------------------------------------------------------

fn type_ref(input: &str) -> PResult<FieldType> {
    let list = map(
        tuple((punct('['), name, opt(punct('!')), punct(']'))),
        |(_, inner, item_bang, _)| {
            let mut ty = FieldType::list_of(inner);
            ty.item_nullable = item_bang.is_none();
            ty
        },
    );
    let named = map(name, |inner: &str| FieldType::named(inner));
    map(pair(alt((list, named)), opt(punct('!'))), |(mut ty, bang)| {
        if bang.is_some() {
            ty.nullable = false;
        }
        ty
    })(input)
}

fn input_value(input: &str) -> PResult<InputValueDefinition> {
    map(
        tuple((
            opt(description),
            name,
            punct(':'),
            type_ref,
            opt(preceded(punct('='), value_text)),
            directives,
        )),
        |(_, name, _, ty, default_value, _)| InputValueDefinition {
            name: name.to_string(),
            ty,
            default_value: default_value.map(str::to_string),
        },
    )(input)
}

fn arguments_definition(input: &str) -> PResult<Vec<InputValueDefinition>> {
    delimited(punct('('), many0(input_value), punct(')'))(input)
}

/// Output field or input field; input defaults are accepted and dropped
fn field_definition(input: &str) -> PResult<FieldDefinition> {
    map(
        tuple((
            opt(description),
            name,
            opt(arguments_definition),
            punct(':'),
            type_ref,
            opt(preceded(punct('='), value_text)),
            directives,
        )),
        |(_, name, arguments, _, ty, _, _)| FieldDefinition {
            name: name.to_string(),
            ty,
            arguments: arguments.unwrap_or_default(),
        },
    )(input)
}

fn fields_definition(input: &str) -> PResult<Vec<FieldDefinition>> {
    delimited(punct('{'), many0(field_definition), punct('}'))(input)
}

fn implements_interfaces(input: &str) -> PResult<Vec<String>> {
    map(
        preceded(
            pair(keyword("implements"), opt(punct('&'))),
            separated_list1(punct('&'), name),
        ),
        |names| names.into_iter().map(str::to_string).collect(),
    )(input)
}

// ---------------------------------------------------------------------------
// Definitions
// ---------------------------------------------------------------------------

fn object_definition<'a>(kind: ObjectKind) -> impl FnMut(&'a str) -> PResult<'a, NamedType> {
    map(
        tuple((
            keyword(kind.keyword()),
            name,
            opt(implements_interfaces),
            directives,
            opt(fields_definition),
        )),
        move |(_, name, implements, _, fields)| {
            let mut object = ObjectType::new(name, kind);
            object.implements = implements.unwrap_or_default();
            for field in fields.unwrap_or_default() {
                object.add_field(field);
            }
            NamedType::Object(object)
        },
    )
}

fn union_definition(input: &str) -> PResult<NamedType> {
    map(
        tuple((
            keyword("union"),
            name,
            directives,
            opt(preceded(
                pair(punct('='), opt(punct('|'))),
                separated_list1(punct('|'), name),
            )),
        )),
        |(_, name, _, members)| {
            let mut union = ObjectType::new(name, ObjectKind::Union);
            union.members = members
                .unwrap_or_default()
                .into_iter()
                .map(str::to_string)
                .collect();
            NamedType::Object(union)
        },
    )(input)
}

fn enum_definition(input: &str) -> PResult<NamedType> {
    let enum_value = map(tuple((opt(description), name, directives)), |(_, v, _)| v);
    map(
        tuple((
            keyword("enum"),
            name,
            directives,
            opt(delimited(punct('{'), many0(enum_value), punct('}'))),
        )),
        |(_, name, _, values)| {
            NamedType::Enum(EnumType {
                name: name.to_string(),
                values: values
                    .unwrap_or_default()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            })
        },
    )(input)
}

fn scalar_definition(input: &str) -> PResult<NamedType> {
    map(tuple((keyword("scalar"), name, directives)), |(_, name, _)| {
        NamedType::Scalar(ScalarType {
            name: name.to_string(),
        })
    })(input)
}

fn type_definition(input: &str) -> PResult<NamedType> {
    alt((
        scalar_definition,
        enum_definition,
        union_definition,
        object_definition(ObjectKind::Output),
        object_definition(ObjectKind::Interface),
        object_definition(ObjectKind::Input),
    ))(input)
}

fn schema_definition(input: &str) -> PResult<&'static str> {
    value(
        "schema",
        tuple((keyword("schema"), directives, opt(balanced('{', '}')))),
    )(input)
}

fn directive_definition(input: &str) -> PResult<&'static str> {
    value(
        "directive",
        tuple((
            keyword("directive"),
            punct('@'),
            name,
            opt(balanced('(', ')')),
            opt(keyword("repeatable")),
            keyword("on"),
            opt(punct('|')),
            separated_list1(punct('|'), name),
        )),
    )(input)
}

fn definition(input: &str) -> PResult<(&str, Definition)> {
    let (start, _) = ignored(input)?;
    let (rest, definition) = preceded(
        opt(description),
        alt((
            map(type_definition, Definition::Type),
            map(
                preceded(keyword("extend"), type_definition),
                Definition::Extension,
            ),
            map(
                preceded(keyword("extend"), schema_definition),
                Definition::Ignored,
            ),
            map(schema_definition, Definition::Ignored),
            map(directive_definition, Definition::Ignored),
        )),
    )(start)?;
    Ok((rest, (start, definition)))
}

fn document(input: &str) -> PResult<Vec<(&str, Definition)>> {
    terminated(many0(definition), ignored)(input)
}
