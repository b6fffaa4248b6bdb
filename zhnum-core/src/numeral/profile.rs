//! 格式化字表配置
//!
//! 六种固定的输出风格，以及格式选择器

use std::fmt;

use serde::{Deserialize, Serialize};

/// 预定义字表名称
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileName {
    /// 繁体大写（壹佰貳拾參）
    TraditionalUppercase,
    /// 繁体小写（一百二十三）
    TraditionalLowercase,
    /// 简体大写（壹佰贰拾参）
    SimplifiedUppercase,
    /// 简体小写（一百二十三）
    SimplifiedLowercase,
    /// 全形数字（１２３）
    FullwidthWestern,
    /// 半形数字（123）
    HalfwidthWestern,
}

impl ProfileName {
    pub const ALL: [ProfileName; 6] = [
        ProfileName::TraditionalUppercase,
        ProfileName::TraditionalLowercase,
        ProfileName::SimplifiedUppercase,
        ProfileName::SimplifiedLowercase,
        ProfileName::FullwidthWestern,
        ProfileName::HalfwidthWestern,
    ];

    /// 按段组合的四种中文字表
    pub const SEGMENTED: [ProfileName; 4] = [
        ProfileName::TraditionalUppercase,
        ProfileName::TraditionalLowercase,
        ProfileName::SimplifiedUppercase,
        ProfileName::SimplifiedLowercase,
    ];
}

/// 组合方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionMode {
    /// 按萬分段，插入十百千及大单位
    Segmented,
    /// 十进制数字逐位替换；`mapped = false` 时原样输出
    Substitution { mapped: bool },
}

/// 字表
#[derive(Debug, PartialEq, Eq)]
pub struct FormatterProfile {
    name: ProfileName,
    mode: CompositionMode,
    /// 0 至 9
    digits: [&'static str; 10],
    /// 下标 0 不用，1 = 十，2 = 百，3 = 千
    tiny_units: [&'static str; 4],
    /// 下标 0 不用，1 = 萬 … 7 = 穰
    group_units: [&'static str; 8],
}

impl FormatterProfile {
    pub fn name(&self) -> ProfileName {
        self.name
    }

    pub fn mode(&self) -> CompositionMode {
        self.mode
    }

    pub fn digit(&self, value: usize) -> &'static str {
        self.digits[value]
    }

    pub fn zero(&self) -> &'static str {
        self.digits[0]
    }

    pub fn tiny_unit(&self, exponent: usize) -> &'static str {
        self.tiny_units[exponent]
    }

    pub fn group_unit(&self, rank: usize) -> &'static str {
        self.group_units[rank]
    }

    pub fn is_segmented(&self) -> bool {
        self.mode == CompositionMode::Segmented
    }
}

const NO_TINY_UNITS: [&str; 4] = [""; 4];
const NO_GROUP_UNITS: [&str; 8] = [""; 8];

pub static TRADITIONAL_UPPERCASE: FormatterProfile = FormatterProfile {
    name: ProfileName::TraditionalUppercase,
    mode: CompositionMode::Segmented,
    digits: ["零", "壹", "貳", "參", "肆", "伍", "陸", "柒", "捌", "玖"],
    tiny_units: ["", "拾", "佰", "仟"],
    group_units: ["", "萬", "億", "兆", "京", "垓", "秭", "穰"],
};

pub static TRADITIONAL_LOWERCASE: FormatterProfile = FormatterProfile {
    name: ProfileName::TraditionalLowercase,
    mode: CompositionMode::Segmented,
    digits: ["〇", "一", "二", "三", "四", "五", "六", "七", "八", "九"],
    tiny_units: ["", "十", "百", "千"],
    group_units: ["", "萬", "億", "兆", "京", "垓", "秭", "穰"],
};

pub static SIMPLIFIED_UPPERCASE: FormatterProfile = FormatterProfile {
    name: ProfileName::SimplifiedUppercase,
    mode: CompositionMode::Segmented,
    digits: ["零", "壹", "贰", "参", "肆", "伍", "陆", "柒", "捌", "玖"],
    tiny_units: ["", "拾", "佰", "仟"],
    group_units: ["", "万", "亿", "兆", "京", "垓", "秭", "穰"],
};

pub static SIMPLIFIED_LOWERCASE: FormatterProfile = FormatterProfile {
    name: ProfileName::SimplifiedLowercase,
    mode: CompositionMode::Segmented,
    digits: ["〇", "一", "二", "三", "四", "五", "六", "七", "八", "九"],
    tiny_units: ["", "十", "百", "千"],
    group_units: ["", "万", "亿", "兆", "京", "垓", "秭", "穰"],
};

pub static FULLWIDTH_WESTERN: FormatterProfile = FormatterProfile {
    name: ProfileName::FullwidthWestern,
    mode: CompositionMode::Substitution { mapped: true },
    digits: ["０", "１", "２", "３", "４", "５", "６", "７", "８", "９"],
    tiny_units: NO_TINY_UNITS,
    group_units: NO_GROUP_UNITS,
};

pub static HALFWIDTH_WESTERN: FormatterProfile = FormatterProfile {
    name: ProfileName::HalfwidthWestern,
    mode: CompositionMode::Substitution { mapped: false },
    digits: ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"],
    tiny_units: NO_TINY_UNITS,
    group_units: NO_GROUP_UNITS,
};

/// 按名称取字表
pub fn profile(name: ProfileName) -> &'static FormatterProfile {
    match name {
        ProfileName::TraditionalUppercase => &TRADITIONAL_UPPERCASE,
        ProfileName::TraditionalLowercase => &TRADITIONAL_LOWERCASE,
        ProfileName::SimplifiedUppercase => &SIMPLIFIED_UPPERCASE,
        ProfileName::SimplifiedLowercase => &SIMPLIFIED_LOWERCASE,
        ProfileName::FullwidthWestern => &FULLWIDTH_WESTERN,
        ProfileName::HalfwidthWestern => &HALFWIDTH_WESTERN,
    }
}

/// 格式选择器：六种字表，或普通十进制
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FormatSelector {
    #[default]
    TraditionalUppercase,
    TraditionalLowercase,
    SimplifiedUppercase,
    SimplifiedLowercase,
    FullwidthWestern,
    HalfwidthWestern,
    PlainDecimal,
}

impl FormatSelector {
    /// 从格式代码取选择器
    ///
    /// - `TW` / `zh-TW`: 繁体大写
    /// - `tw` / `zh-tw`: 繁体小写
    /// - `CN` / `zh-CN`: 简体大写
    /// - `cn` / `zh-cn`: 简体小写
    /// - `FW` / `fw`: 全形数字
    /// - `HW` / `hw`: 半形数字
    /// - 其他: 普通十进制
    pub fn from_code(code: &str) -> Self {
        match code {
            "TW" | "zh-TW" => Self::TraditionalUppercase,
            "tw" | "zh-tw" => Self::TraditionalLowercase,
            "CN" | "zh-CN" => Self::SimplifiedUppercase,
            "cn" | "zh-cn" => Self::SimplifiedLowercase,
            "FW" | "fw" => Self::FullwidthWestern,
            "HW" | "hw" => Self::HalfwidthWestern,
            _ => Self::PlainDecimal,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::TraditionalUppercase => "TW",
            Self::TraditionalLowercase => "tw",
            Self::SimplifiedUppercase => "CN",
            Self::SimplifiedLowercase => "cn",
            Self::FullwidthWestern => "FW",
            Self::HalfwidthWestern => "HW",
            Self::PlainDecimal => "",
        }
    }

    pub fn profile_name(self) -> Option<ProfileName> {
        match self {
            Self::TraditionalUppercase => Some(ProfileName::TraditionalUppercase),
            Self::TraditionalLowercase => Some(ProfileName::TraditionalLowercase),
            Self::SimplifiedUppercase => Some(ProfileName::SimplifiedUppercase),
            Self::SimplifiedLowercase => Some(ProfileName::SimplifiedLowercase),
            Self::FullwidthWestern => Some(ProfileName::FullwidthWestern),
            Self::HalfwidthWestern => Some(ProfileName::HalfwidthWestern),
            Self::PlainDecimal => None,
        }
    }

    pub fn profile(self) -> Option<&'static FormatterProfile> {
        self.profile_name().map(profile)
    }
}

impl From<ProfileName> for FormatSelector {
    fn from(name: ProfileName) -> Self {
        match name {
            ProfileName::TraditionalUppercase => Self::TraditionalUppercase,
            ProfileName::TraditionalLowercase => Self::TraditionalLowercase,
            ProfileName::SimplifiedUppercase => Self::SimplifiedUppercase,
            ProfileName::SimplifiedLowercase => Self::SimplifiedLowercase,
            ProfileName::FullwidthWestern => Self::FullwidthWestern,
            ProfileName::HalfwidthWestern => Self::HalfwidthWestern,
        }
    }
}

impl fmt::Display for FormatSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
