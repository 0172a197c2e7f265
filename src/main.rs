// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use tracing::{error, info};
use x_scraper::utils::telemetry;
use x_scraper::{Settings, XScraper};

/// 主函数
///
/// 加载配置并执行一次完整的抓取与分析
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting x-scraper...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!(
        source_url = %settings.scraper.source_url,
        limit = settings.scraper.limit,
        min_chars = settings.scraper.min_chars,
        "Configuration loaded"
    );

    // 3. Run the pipeline once
    let scraper = XScraper::new(settings.scraper)?;
    match scraper.run().await {
        Ok(paths) => {
            info!(
                detail_csv = %paths.detail_csv.display(),
                sentiment_report_csv = %paths.sentiment_report_csv.display(),
                "Reports generated"
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Pipeline run failed");
            Err(e.into())
        }
    }
}
