// ==========================================
// 测试数据生成器
// ==========================================
// 用途: 生成预测数据与门店规模种子 CSV 文件
// 输出: tests/fixtures/datasets/*.csv
// ==========================================

use csv::Writer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::fs::{self, File};

const OUTPUT_DIR: &str = "tests/fixtures/datasets";

// CSV 表头
const FORECAST_HEADER: &[&str] = &["Month", "Region", "Product", "Need"];
const STORE_SIZE_HEADER: &[&str] = &["Store", "Size"];

const MONTHS: &[&str] = &[
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const REGIONS: &[&str] = &[
    "extreme_north",
    "north",
    "south",
    "east",
    "west",
    "central",
];

const PRODUCTS: &[&str] = &[
    "Bisleri-1L",
    "Bisleri-500ml",
    "Kinley-1L",
    "Kinley-500ml",
    "Aquafina-1L",
];

const SIZE_CODES: &[&str] = &["xs", "s", "m", "l", "xl"];

fn main() -> Result<(), Box<dyn Error>> {
    println!("开始生成测试数据集...");
    fs::create_dir_all(OUTPUT_DIR)?;

    // 1. 全量预测数据 (12 月 × 6 区域 × 5 产品)
    generate_forecast_data()?;

    // 2. 门店规模种子 (50 家门店)
    generate_store_sizes(50)?;

    println!("✓ 所有测试数据集生成完成！");
    Ok(())
}

fn generate_forecast_data() -> Result<(), Box<dyn Error>> {
    let path = format!("{}/forecast_data.csv", OUTPUT_DIR);
    let mut wtr = Writer::from_writer(File::create(&path)?);
    let mut rng = StdRng::seed_from_u64(20240101);

    wtr.write_record(FORECAST_HEADER)?;

    let mut count = 0;
    for month in MONTHS {
        for region in REGIONS {
            for product in PRODUCTS {
                let need: u32 = rng.gen_range(0..=120);
                wtr.write_record([*month, *region, *product, need.to_string().as_str()])?;
                count += 1;
            }
        }
    }

    wtr.flush()?;
    println!("✓ 生成 {} ({} 条)", path, count);
    Ok(())
}

fn generate_store_sizes(store_count: usize) -> Result<(), Box<dyn Error>> {
    let path = format!("{}/store_sizes.csv", OUTPUT_DIR);
    let mut wtr = Writer::from_writer(File::create(&path)?);
    let mut rng = StdRng::seed_from_u64(7);

    wtr.write_record(STORE_SIZE_HEADER)?;

    for idx in 1..=store_count {
        let size = SIZE_CODES[rng.gen_range(0..SIZE_CODES.len())];
        wtr.write_record([format!("str{}", idx).as_str(), size])?;
    }

    wtr.flush()?;
    println!("✓ 生成 {} ({} 条)", path, store_count);
    Ok(())
}
