//! 中文数字演示程序
//!
//! 运行：cargo run --example numeral_demo --features debug-logs

use zhnum_core::{
    format, parse, FormatSelector, NormalizeMode, NumeralConfig, NumeralNormalizer,
};

fn main() {
    zhnum_core::init_logging();

    println!("=== zhnum 中文数字演示 ===\n");

    println!("【解析】\n");
    let inputs = [
        "三千零七十三",
        "一千七百五",
        "三萬五",
        "兆百億",
        "壹壹肆伍壹肆",
        "一百千",
        "三點",
    ];
    for (i, input) in inputs.iter().enumerate() {
        match parse(input) {
            Ok(value) => println!("#{} ✓ \"{}\" → {}", i + 1, input, value),
            Err(e) => println!("#{} ✗ \"{}\" → {}", i + 1, input, e),
        }
    }

    println!("\n【格式化】\n");
    let codes = ["TW", "tw", "CN", "cn", "FW", "HW"];
    for value in [0u64, 1003, 101_003, 1_0000_9999, 20_000_000_000_001] {
        println!("{}", value);
        for code in codes {
            println!("  {:>2}: {}", code, format(value.into(), FormatSelector::from_code(code)));
        }
    }

    println!("\n【文本内数字统一】\n");
    let config = NumeralConfig::load().unwrap_or_else(|e| {
        println!("配置加载失败，使用默认配置: {}", e);
        NumeralConfig::default()
    });
    println!(
        "默认格式 {}: {}",
        config.default_style,
        config.format(parse("三千零七十三").unwrap_or_default())
    );
    let normalizers = [
        ("config", config.normalizer()),
        (
            "digits",
            NumeralNormalizer::new(NormalizeMode::DigitsOnly, FormatSelector::FullwidthWestern),
        ),
    ];
    let text = "重慶南路一段一二二號十八樓";
    for (label, normalizer) in &normalizers {
        let result = normalizer.process(text);
        println!("[{}] \"{}\" → \"{}\"", label, text, result.text);
        for change in &result.changes {
            println!("    - \"{}\" → \"{}\"", change.original_text, change.normalized_text);
        }
        println!("    回滚: \"{}\"", NumeralNormalizer::rollback(&result));
    }
}
