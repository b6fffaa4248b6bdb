//! 数字字表
//!
//! 固定的字符 → Token 映射表，涵盖繁体、简体、大写、全形数字及若干异体字。
//! 全局只构建一次，之后只读。

use std::collections::HashMap;

use lazy_static::lazy_static;

/// 段内小单位：十、百、千
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TinyUnit {
    Ten,
    Hundred,
    Thousand,
}

impl TinyUnit {
    /// 十的幂次（十 = 1，百 = 2，千 = 3），同时作为排序用的序号
    pub const fn exponent(self) -> u32 {
        match self {
            TinyUnit::Ten => 1,
            TinyUnit::Hundred => 2,
            TinyUnit::Thousand => 3,
        }
    }

    pub const fn magnitude(self) -> u128 {
        10u128.pow(self.exponent())
    }
}

/// 大单位：萬、億、兆、京、垓、秭、穰（每级相差 10^4）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupUnit {
    TenThousand,
    HundredMillion,
    Trillion,
    TenQuadrillion,
    HundredQuintillion,
    Septillion,
    TenOctillion,
}

impl GroupUnit {
    pub const ALL: [GroupUnit; 7] = [
        GroupUnit::TenThousand,
        GroupUnit::HundredMillion,
        GroupUnit::Trillion,
        GroupUnit::TenQuadrillion,
        GroupUnit::HundredQuintillion,
        GroupUnit::Septillion,
        GroupUnit::TenOctillion,
    ];

    /// 级数：萬 = 1 … 穰 = 7
    pub const fn rank(self) -> usize {
        match self {
            GroupUnit::TenThousand => 1,
            GroupUnit::HundredMillion => 2,
            GroupUnit::Trillion => 3,
            GroupUnit::TenQuadrillion => 4,
            GroupUnit::HundredQuintillion => 5,
            GroupUnit::Septillion => 6,
            GroupUnit::TenOctillion => 7,
        }
    }

    pub const fn exponent(self) -> u32 {
        4 * self.rank() as u32
    }

    pub const fn magnitude(self) -> u128 {
        10u128.pow(self.exponent())
    }
}

/// Token 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Zero,
    /// 一至九
    Digit(u8),
    Tiny(TinyUnit),
    Group(GroupUnit),
    Unknown,
}

/// 字表条目
#[derive(Debug, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    magnitude: u128,
    glyphs: &'static [char],
}

impl Token {
    const fn digit(value: u8, glyphs: &'static [char]) -> Self {
        let kind = if value == 0 {
            TokenKind::Zero
        } else {
            TokenKind::Digit(value)
        };
        Self {
            kind,
            magnitude: value as u128,
            glyphs,
        }
    }

    const fn tiny(unit: TinyUnit, glyphs: &'static [char]) -> Self {
        Self {
            kind: TokenKind::Tiny(unit),
            magnitude: unit.magnitude(),
            glyphs,
        }
    }

    const fn group(unit: GroupUnit, glyphs: &'static [char]) -> Self {
        Self {
            kind: TokenKind::Group(unit),
            magnitude: unit.magnitude(),
            glyphs,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn magnitude(&self) -> u128 {
        self.magnitude
    }

    /// 映射到此 Token 的全部字符
    pub fn glyphs(&self) -> &'static [char] {
        self.glyphs
    }

    pub fn is_unknown(&self) -> bool {
        self.kind == TokenKind::Unknown
    }

    pub fn is_zero(&self) -> bool {
        self.kind == TokenKind::Zero
    }

    /// 零到九（含零）
    pub fn is_digit(&self) -> bool {
        matches!(self.kind, TokenKind::Zero | TokenKind::Digit(_))
    }

    /// 十、百、千、萬、億……
    pub fn is_multiplier(&self) -> bool {
        matches!(self.kind, TokenKind::Tiny(_) | TokenKind::Group(_))
    }
}

/// 未知字符
pub static UNKNOWN: Token = Token {
    kind: TokenKind::Unknown,
    magnitude: 0,
    glyphs: &[],
};

/// 固定顺序：零、一至九、十百千、萬至穰
pub static TOKENS: [Token; 20] = [
    Token::digit(0, &['〇', '0', '零', '０']),
    Token::digit(1, &['一', '1', '壹', '１', '壱', '弌']),
    Token::digit(2, &['二', '2', '貳', '２', '贰', '兩', '两', '弐', '弍']),
    Token::digit(3, &['三', '3', '參', '３', '参', '叁', '弎']),
    Token::digit(4, &['四', '4', '肆', '４']),
    Token::digit(5, &['五', '5', '伍', '５']),
    Token::digit(6, &['六', '6', '陸', '６', '陆']),
    Token::digit(7, &['七', '7', '柒', '７']),
    Token::digit(8, &['八', '8', '捌', '８']),
    Token::digit(9, &['九', '9', '玖', '９']),
    Token::tiny(TinyUnit::Ten, &['十', '拾']),
    Token::tiny(TinyUnit::Hundred, &['百', '佰']),
    Token::tiny(TinyUnit::Thousand, &['千', '仟']),
    Token::group(GroupUnit::TenThousand, &['萬', '万']),
    Token::group(GroupUnit::HundredMillion, &['億', '亿']),
    Token::group(GroupUnit::Trillion, &['兆']),
    Token::group(GroupUnit::TenQuadrillion, &['京']),
    Token::group(GroupUnit::HundredQuintillion, &['垓']),
    Token::group(GroupUnit::Septillion, &['秭']),
    Token::group(GroupUnit::TenOctillion, &['穰']),
];

lazy_static! {
    static ref GLYPH_INDEX: HashMap<char, &'static Token> = {
        let mut index = HashMap::new();
        for token in TOKENS.iter() {
            for &glyph in token.glyphs {
                index.insert(glyph, token);
            }
        }
        index
    };
}

/// 查找字符对应的 Token，不在字表中时返回 [`UNKNOWN`]
pub fn resolve(glyph: char) -> &'static Token {
    GLYPH_INDEX.get(&glyph).copied().unwrap_or(&UNKNOWN)
}

/// 检查字符是否在字表中
pub fn contains(glyph: char) -> bool {
    GLYPH_INDEX.contains_key(&glyph)
}

/// 按字表顺序列出全部已知字符
pub fn all_glyphs() -> impl Iterator<Item = char> {
    TOKENS.iter().flat_map(|token| token.glyphs.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_digits() {
        assert_eq!(resolve('零').kind(), TokenKind::Zero);
        assert_eq!(resolve('〇').kind(), TokenKind::Zero);
        assert_eq!(resolve('０').kind(), TokenKind::Zero);
        assert_eq!(resolve('一').kind(), TokenKind::Digit(1));
        assert_eq!(resolve('壱').kind(), TokenKind::Digit(1));
        assert_eq!(resolve('弌').kind(), TokenKind::Digit(1));
        assert_eq!(resolve('兩').kind(), TokenKind::Digit(2));
        assert_eq!(resolve('参').kind(), TokenKind::Digit(3));
        assert_eq!(resolve('7').kind(), TokenKind::Digit(7));
        assert_eq!(resolve('玖').magnitude(), 9);
    }

    #[test]
    fn test_resolve_multipliers() {
        assert_eq!(resolve('拾').kind(), TokenKind::Tiny(TinyUnit::Ten));
        assert_eq!(resolve('佰').magnitude(), 100);
        assert_eq!(resolve('仟').magnitude(), 1000);
        assert_eq!(resolve('万').kind(), TokenKind::Group(GroupUnit::TenThousand));
        assert_eq!(resolve('亿').magnitude(), 100_000_000);
        assert_eq!(resolve('兆').magnitude(), 1_000_000_000_000);
        assert_eq!(resolve('穰').magnitude(), 10u128.pow(28));
    }

    #[test]
    fn test_resolve_unknown() {
        assert!(resolve('其').is_unknown());
        assert!(resolve(' ').is_unknown());
        assert!(resolve('點').is_unknown());
        assert!(!contains('a'));
        assert!(contains('億'));
    }

    #[test]
    fn test_unit_order() {
        assert!(TinyUnit::Ten < TinyUnit::Hundred);
        assert!(TinyUnit::Hundred < TinyUnit::Thousand);
        assert!(GroupUnit::TenThousand < GroupUnit::HundredMillion);
        assert!(GroupUnit::Septillion < GroupUnit::TenOctillion);
        assert_eq!(GroupUnit::Trillion.rank(), 3);
        assert_eq!(GroupUnit::TenOctillion.exponent(), 28);
    }

    #[test]
    fn test_every_glyph_is_unique() {
        let total: usize = TOKENS.iter().map(|t| t.glyphs().len()).sum();
        assert_eq!(GLYPH_INDEX.len(), total);
        assert_eq!(all_glyphs().count(), total);
    }

    #[test]
    fn test_token_predicates() {
        assert!(resolve('零').is_digit());
        assert!(resolve('五').is_digit());
        assert!(!resolve('十').is_digit());
        assert!(resolve('十').is_multiplier());
        assert!(resolve('萬').is_multiplier());
        assert!(!resolve('三').is_multiplier());
    }
}
