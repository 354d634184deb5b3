mod config;

use std::path::PathBuf;

use beans::bean::DataBean;
use beans::geometry::intersection::point_is_inside_rect;
use beans::{dump, sample};
use config::ProgramConfig;

fn init_logging() {
    simple_logger::SimpleLogger::new().init().unwrap();
}

fn init_config() -> ProgramConfig {
    let mut config = ProgramConfig::from_file(&PathBuf::from("config.ini"));

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "--points" {
        config.point_count = args[2].parse::<u64>().unwrap();
    }

    config
}

fn main() {
    /* Initialize */
    init_logging();
    let mut config = init_config();

    /* Populate */
    let bean = sample::sample_bean(config.point_count as usize, &config.message);
    log::info!("Populated sample bean with {} points", config.point_count);
    dump::log_bean(&bean);

    /* Compare */
    let mut copy = bean.clone();
    log::info!("Copy equals original: {}", copy == bean);
    copy.id += 1;
    log::info!("Copy equals original after edit: {}", copy == bean);

    report_points_outside_rect(&bean);

    config.write_to_disk();
}

fn report_points_outside_rect(bean: &DataBean) {
    let Some(points) = &bean.points else {
        log::warn!("Bean has no points to check");
        return;
    };
    let outside = points
        .iter()
        .filter(|point| !point_is_inside_rect(**point, bean.rectangle))
        .count();
    if outside > 0 {
        log::warn!("{} point(s) fall outside the rectangle", outside);
    } else {
        log::info!("All {} point(s) fall inside the rectangle", points.len());
    }
}
