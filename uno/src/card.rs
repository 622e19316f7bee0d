use core::fmt;
use std::{fmt::Display, str::FromStr};

use strum_macros::{Display, EnumIter, EnumString};

use crate::{
    constants::{ACTION_CARD_POINTS, WILD_CARD_POINTS},
    error::{Result, UnoError},
};

#[derive(Clone, Copy, Debug, Display, EnumString, EnumIter, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CardColor {
    Red,
    Blue,
    Green,
    Yellow,
    Wild,
}

impl CardColor {
    /// The four colors a non-wild card can carry.
    pub const SUITS: [CardColor; 4] = [
        CardColor::Red,
        CardColor::Blue,
        CardColor::Green,
        CardColor::Yellow,
    ];

    pub fn is_wild(&self) -> bool {
        matches!(self, CardColor::Wild)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardValue {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl CardValue {
    pub fn is_wild(&self) -> bool {
        matches!(self, CardValue::Wild | CardValue::WildDrawFour)
    }
}

impl Display for CardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardValue::Number(number) => write!(f, "{number}"),
            CardValue::Skip => write!(f, "X"),
            CardValue::Reverse => write!(f, "R"),
            CardValue::DrawTwo => write!(f, "+2"),
            CardValue::Wild => write!(f, "W"),
            CardValue::WildDrawFour => write!(f, "+4"),
        }
    }
}

impl FromStr for CardValue {
    type Err = UnoError;

    fn from_str(s: &str) -> Result<Self> {
        let value = match s {
            "X" => CardValue::Skip,
            "R" => CardValue::Reverse,
            "+2" => CardValue::DrawTwo,
            "W" => CardValue::Wild,
            "+4" => CardValue::WildDrawFour,
            _ => match s.as_bytes() {
                [digit @ b'0'..=b'9'] => CardValue::Number(digit - b'0'),
                _ => return Err(UnoError::bad_input(format!("Unknown card value `{s}`"))),
            },
        };
        Ok(value)
    }
}

/// A single card. Wild values always come with the wild color and colored
/// values never do.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    color: CardColor,
    value: CardValue,
}

impl Card {
    pub fn new(color: CardColor, value: CardValue) -> Result<Self> {
        if let CardValue::Number(number) = value {
            if number > 9 {
                return Err(UnoError::bad_input(format!(
                    "Number cards go from 0 to 9, got {number}"
                )));
            }
        }

        if color.is_wild() != value.is_wild() {
            return Err(UnoError::bad_input(format!(
                "A `{value}` card cannot have the color {color}"
            )));
        }

        Ok(Self { color, value })
    }

    pub fn wild() -> Self {
        Self {
            color: CardColor::Wild,
            value: CardValue::Wild,
        }
    }

    pub fn wild_draw_four() -> Self {
        Self {
            color: CardColor::Wild,
            value: CardValue::WildDrawFour,
        }
    }

    /// Builds a card the deck already knows to be valid.
    pub(crate) fn colored(color: CardColor, value: CardValue) -> Self {
        debug_assert!(!color.is_wild() && !value.is_wild());
        Self { color, value }
    }

    pub fn color(&self) -> CardColor {
        self.color
    }

    pub fn value(&self) -> CardValue {
        self.value
    }

    pub fn is_wild(&self) -> bool {
        self.color.is_wild()
    }

    pub fn is_zero(&self) -> bool {
        self.value == CardValue::Number(0)
    }

    pub fn points(&self) -> u32 {
        match self.value {
            CardValue::Number(number) => number.into(),
            CardValue::Skip | CardValue::Reverse | CardValue::DrawTwo => ACTION_CARD_POINTS,
            CardValue::Wild | CardValue::WildDrawFour => WILD_CARD_POINTS,
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.color, self.value)
    }
}

impl FromStr for Card {
    type Err = UnoError;

    fn from_str(s: &str) -> Result<Self> {
        let (color, value) = s.split_once(',').ok_or_else(|| {
            UnoError::bad_input(format!("Expected a card like `red,5`, got `{s}`"))
        })?;

        let color = color
            .trim()
            .parse::<CardColor>()
            .map_err(|_| UnoError::bad_input(format!("Unknown card color `{color}`")))?;
        let value = value.trim().parse::<CardValue>()?;

        Card::new(color, value)
    }
}
