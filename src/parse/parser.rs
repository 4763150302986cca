use super::lexer::{TokenKind, TokenStream};
use crate::common::*;
use crate::error::RollError;
use crate::eval::Evaluation;
use crate::roll::{Modifier, RollContext, RollHistory, Roller};
use std::num::NonZeroUsize;

/// Recursive-descent parser with one token of lookahead that evaluates as it recognizes.
///
/// ```text
/// expression := term termTail
/// termTail   := ε | ')' | '+' term termTail | '-' term termTail
/// term       := factor factorTail
/// factorTail := ε | '*' factor factorTail | '/' factor factorTail
/// factor     := '-' factor | '(' expression | diceRoll | constant
/// diceRoll   := constant 'd' constant modTail | 'd' constant modTail
/// modTail    := ε | ('d' | 't') constant modTail
/// ```
///
/// Every binary operator combines its left operand with the value of the whole tail to
/// its right, so `10-3-2` is `10-(3-2)` and `8/4/2` is `8/(4/2)`. A leading `-` is
/// consumed without negating the factor that follows. The closing `)` of a group is
/// consumed by `termTail`.
pub(crate) struct Parser<'s, 'c, R> {
    tokens: TokenStream<'s>,
    ctx: &'c mut RollContext<R>,
    history: RollHistory,
}

impl<'s, 'c, R: Roller> Parser<'s, 'c, R> {
    const TERM_TAIL: &'static [TokenKind] =
        &[TokenKind::Plus, TokenKind::Minus, TokenKind::RightParen];

    const FACTOR_TAIL: &'static [TokenKind] = &[
        TokenKind::Times,
        TokenKind::Div,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::RightParen,
    ];

    const FACTOR: &'static [TokenKind] = &[
        TokenKind::Minus,
        TokenKind::LeftParen,
        TokenKind::D,
        TokenKind::Constant,
    ];

    const MOD_TAIL: &'static [TokenKind] = &[
        TokenKind::D,
        TokenKind::T,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Times,
        TokenKind::Div,
        TokenKind::RightParen,
    ];

    pub fn new(tokens: TokenStream<'s>, ctx: &'c mut RollContext<R>) -> Self {
        Self {
            tokens,
            ctx,
            history: RollHistory::new(),
        }
    }

    pub fn parse(mut self) -> RResult<Evaluation> {
        let total = self.parse_expression()?;
        Ok(Evaluation::new(total, self.history))
    }

    fn peek(&self) -> Option<TokenKind> {
        self.tokens.current().map(|token| token.kind)
    }

    fn matches(&self, kind: TokenKind) -> bool {
        self.peek() == Some(kind)
    }

    fn matches_any(&self, options: &[TokenKind]) -> bool {
        self.peek().map_or(false, |kind| options.contains(&kind))
    }

    fn consume(&mut self, expected: TokenKind) -> RResult<&'s str> {
        match self.tokens.current().copied() {
            Some(token) if token.kind == expected => {
                self.tokens.advance();
                Ok(token.slice)
            }
            _ => self.unexpected_token(&[expected]),
        }
    }

    fn unexpected_token<T>(&self, expected: &[TokenKind]) -> RResult<T> {
        Err(RollError::UnexpectedToken {
            position: self.tokens.position(),
            expected: expected.to_vec(),
            found: self.tokens.current().map(|token| token.slice.to_string()),
        })
    }

    fn parse_expression(&mut self) -> RResult<Int> {
        let term = self.parse_term()?;
        self.parse_term_tail(term)
    }

    fn parse_term_tail(&mut self, term: Int) -> RResult<Int> {
        match self.peek() {
            None => Ok(term),
            Some(TokenKind::RightParen) => {
                self.tokens.advance();
                Ok(term)
            }
            Some(TokenKind::Plus) => {
                self.tokens.advance();
                let rhs = self.parse_term()?;
                let tail = self.parse_term_tail(rhs)?;
                checked(term.checked_add(tail))
            }
            Some(TokenKind::Minus) => {
                self.tokens.advance();
                let rhs = self.parse_term()?;
                let tail = self.parse_term_tail(rhs)?;
                checked(term.checked_sub(tail))
            }
            Some(_) => self.unexpected_token(Self::TERM_TAIL),
        }
    }

    fn parse_term(&mut self) -> RResult<Int> {
        let factor = self.parse_factor()?;
        self.parse_factor_tail(factor)
    }

    fn parse_factor_tail(&mut self, factor: Int) -> RResult<Int> {
        match self.peek() {
            None | Some(TokenKind::Plus | TokenKind::Minus | TokenKind::RightParen) => Ok(factor),
            Some(TokenKind::Times) => {
                self.tokens.advance();
                let rhs = self.parse_factor()?;
                let tail = self.parse_factor_tail(rhs)?;
                checked(factor.checked_mul(tail))
            }
            Some(TokenKind::Div) => {
                self.tokens.advance();
                let rhs = self.parse_factor()?;
                let tail = self.parse_factor_tail(rhs)?;
                if tail == 0 {
                    Err(RollError::ZeroDivision)
                } else {
                    checked(factor.checked_div(tail))
                }
            }
            Some(_) => self.unexpected_token(Self::FACTOR_TAIL),
        }
    }

    fn parse_factor(&mut self) -> RResult<Int> {
        match self.peek() {
            Some(TokenKind::Minus) => {
                self.tokens.advance();
                self.parse_factor()
            }
            Some(TokenKind::LeftParen) => {
                self.tokens.advance();
                self.parse_expression()
            }
            Some(TokenKind::D) => self.parse_dice_roll(),
            Some(TokenKind::Constant)
                if self.tokens.lookahead().map(|token| token.kind) == Some(TokenKind::D) =>
            {
                self.parse_dice_roll()
            }
            Some(TokenKind::Constant) => self.parse_constant(),
            _ => self.unexpected_token(Self::FACTOR),
        }
    }

    fn parse_constant(&mut self) -> RResult<Int> {
        let slice = self.consume(TokenKind::Constant)?;
        slice
            .parse()
            .map_err(|_| RollError::ConstantOutOfRange(slice.to_string()))
    }

    fn parse_dice_roll(&mut self) -> RResult<Int> {
        let count = if self.matches(TokenKind::Constant) {
            self.parse_constant()?
        } else {
            1
        };
        self.consume(TokenKind::D)?;
        let sides = self.parse_constant()?;

        let sides = UInt::try_from(sides)
            .ok()
            .and_then(NonZeroUInt::new)
            .ok_or(RollError::InvalidSides(sides))?;
        let num = usize::try_from(count)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(RollError::InvalidCount(count))?;

        let group = self.ctx.roll(num, sides)?;
        self.history.push(group.clone());
        let dice = self.parse_mod_tail(group.into_vec())?;
        sum_faces(&dice)
    }

    fn parse_mod_tail(&mut self, mut dice: Vec<UInt>) -> RResult<Vec<UInt>> {
        loop {
            if self.matches_any(TokenKind::MODIFIERS) {
                dice = self.parse_modifier()?.apply(dice)?;
            } else if self.peek().is_none() || self.matches_any(&Self::MOD_TAIL[2..]) {
                return Ok(dice);
            } else {
                return self.unexpected_token(Self::MOD_TAIL);
            }
        }
    }

    fn parse_modifier(&mut self) -> RResult<Modifier> {
        let modifier: fn(usize) -> Modifier = match self.tokens.advance() {
            Some(token) if token.kind == TokenKind::T => Modifier::KeepTop,
            _ => Modifier::DropLowest,
        };
        if self.tokens.current().is_none() {
            return Err(RollError::MissingModifierParameter(modifier(0).name()));
        }

        let amount = self.parse_constant()?;
        usize::try_from(amount)
            .map(modifier)
            .map_err(|_| RollError::ConstantOutOfRange(amount.to_string()))
    }
}
