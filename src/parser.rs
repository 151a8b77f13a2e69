use nom::branch::alt;
use nom::character::complete::{char, digit1, multispace0, multispace1};
use nom::combinator::{all_consuming, cut, map_res, opt, recognize, value};
use nom::error::{context, VerboseError};
use nom::multi::{separated_list0, separated_list1};
use nom::number::complete::double;
use nom::sequence::{delimited, pair, preceded, terminated};
use nom::IResult;
use nom_locate::LocatedSpan;

use crate::errors::DncError;
use crate::matrix::Matrix;

pub type Span<'a> = LocatedSpan<&'a str>;
pub type PResult<'a, T> = IResult<Span<'a>, T, VerboseError<Span<'a>>>;

/*
    ╒═════════════════╕
    │ Element parsers │
    ╘═════════════════╛
*/

pub fn integer_parser(input: Span<'_>) -> PResult<'_, i64> {
    context(
        "Expected an integer",
        map_res(
            recognize(pair(opt(char('-')), digit1)),
            |s: Span<'_>| s.fragment().parse::<i64>()
        )
    )(input)
}

pub fn float_parser(input: Span<'_>) -> PResult<'_, f64> {
    context("Expected a number", double)(input)
}

// Commas and/or whitespace
fn separator(input: Span<'_>) -> PResult<'_, ()> {
    alt((
        value((), delimited(multispace0, char(','), multispace0)),
        value((), multispace1)
    ))(input)
}

fn list_parser<'a, T, F>(element: F) -> impl FnMut(Span<'a>) -> PResult<'a, Vec<T>>
where
    F: FnMut(Span<'a>) -> PResult<'a, T> + Copy
{
    move |input| {
        alt((
            preceded(
                pair(char('['), multispace0),
                cut(terminated(
                    separated_list0(separator, element),
                    context("Expected ']'", pair(multispace0, char(']')))
                ))
            ),
            separated_list0(separator, element)
        ))(input)
    }
}

fn matrix_parser<'a, T, F>(element: F) -> impl FnMut(Span<'a>) -> PResult<'a, Vec<Vec<T>>>
where
    F: FnMut(Span<'a>) -> PResult<'a, T> + Copy
{
    move |input| {
        delimited(
            pair(context("Expected '['", char('[')), multispace0),
            separated_list1(
                delimited(multispace0, char(','), multispace0),
                delimited(
                    pair(context("Expected '['", char('[')), multispace0),
                    separated_list1(separator, element),
                    context("Expected ']'", pair(multispace0, char(']')))
                )
            ),
            context("Expected ']'", pair(multispace0, char(']')))
        )(input)
    }
}

/*
    ╒════════════════════╕
    │ Public entrypoints │
    ╘════════════════════╛
*/

fn parse_whole<'a, T, P>(input: &'a str, parser: P) -> Result<T, DncError>
where
    P: FnMut(Span<'a>) -> PResult<'a, T>
{
    let (_, res) = all_consuming(delimited(multispace0, parser, multispace0))(Span::new(input))?;

    Ok(res)
}

/// Parses sequences such as `[7, 2, 4]`, `7, 2, 4` or `7 2 4`.
pub fn parse_sequence(input: &str) -> Result<Vec<i64>, DncError> {
    parse_whole(input, list_parser(integer_parser))
}

/// Parses integer matrices such as `[[1, 2], [3, 4]]`.
pub fn parse_int_matrix(input: &str) -> Result<Matrix<i64>, DncError> {
    Matrix::from_rows(parse_whole(input, matrix_parser(integer_parser))?)
}

pub fn parse_float_matrix(input: &str) -> Result<Matrix<f64>, DncError> {
    Matrix::from_rows(parse_whole(input, matrix_parser(float_parser))?)
}

/*
                                                  ╒═════════╕
    ============================================= │  TESTS  │ =============================================
                                                  ╘═════════╛
*/
