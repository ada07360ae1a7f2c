// ==========================================
// 商品目录管理系统 - 目录管理器
// ==========================================
// 职责: 目录唯一入口 —— 建档/查找/评审/报表/
//       清单/折扣汇总/批量装载/快照
// 红线: 评审后的键替换为单一逻辑步骤（见 store）
// 红线: 任何失败在操作边界转为日志 + 状态不变
// 并发: 无并发契约，宿主须将实例置于单一所有权边界后串行调用
// ==========================================

use crate::catalog::error::CatalogError;
use crate::catalog::store::CatalogStore;
use crate::clock::{Clock, SystemClock};
use crate::codec;
use crate::config::{CatalogConfig, PRODUCT_FILE_PREFIX, SNAPSHOT_SUFFIX};
use crate::domain::{Product, Rating, Review};
use crate::format::LocaleFormatter;
use anyhow::{anyhow, Context};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

// ==========================================
// CatalogManager - 目录管理器
// ==========================================
pub struct CatalogManager {
    store: CatalogStore,
    formatter: LocaleFormatter,
    config: CatalogConfig,
    clock: Box<dyn Clock>,
}

impl CatalogManager {
    /// 创建管理器并执行启动批量装载
    ///
    /// # 参数
    /// - language_tag: 语言标签（不支持的标签回退 en-GB）
    /// - config: 目录配置
    pub fn new(language_tag: &str, config: CatalogConfig) -> Self {
        Self::with_clock(language_tag, config, Box::new(SystemClock))
    }

    /// 以注入时钟创建（测试 Perishable 折扣时段 / 快照命名）
    pub fn with_clock(language_tag: &str, config: CatalogConfig, clock: Box<dyn Clock>) -> Self {
        let mut manager = Self {
            store: CatalogStore::new(),
            formatter: LocaleFormatter::for_tag(language_tag),
            config,
            clock,
        };
        manager.load_all();
        manager
    }

    /// 切换输出语言（不支持的标签回退 en-GB）
    pub fn change_locale(&mut self, language_tag: &str) {
        self.formatter = LocaleFormatter::for_tag(language_tag);
    }

    /// 当前语言标签
    pub fn locale(&self) -> &'static str {
        self.formatter.tag()
    }

    /// 受支持的语言标签全集
    pub fn supported_locales() -> &'static [&'static str] {
        &crate::format::SUPPORTED_LOCALES
    }

    /// 目录条目数
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // ==========================================
    // 建档
    // ==========================================

    /// 建档非易腐商品（饮品类）
    ///
    /// 身份已存在时为 no-op（既有条目与评论保持原样），
    /// 返回值始终是本次构造的实例
    pub fn create_standard(
        &mut self,
        id: i32,
        name: &str,
        price: Decimal,
        rating: Rating,
    ) -> Product {
        let product = Product::standard(id, name, price, rating);
        self.store.insert_if_absent(product.clone());
        product
    }

    /// 建档易腐商品（食品类，带保质期）
    pub fn create_perishable(
        &mut self,
        id: i32,
        name: &str,
        price: Decimal,
        rating: Rating,
        best_before: NaiveDate,
    ) -> Product {
        let product = Product::perishable(id, name, price, rating, best_before);
        self.store.insert_if_absent(product.clone());
        product
    }

    // ==========================================
    // 查找
    // ==========================================

    /// 按编号查找（目录键线性扫描）
    pub fn find_by_id(&self, id: i32) -> Result<Product, CatalogError> {
        self.store
            .keys()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CatalogError::ProductNotFound(id))
    }

    // ==========================================
    // 评审
    // ==========================================

    /// 按编号评审（宽容路径: 未找到记日志返回 None）
    pub fn review_by_id(&mut self, id: i32, rating: Rating, comment: &str) -> Option<Product> {
        match self.find_by_id(id) {
            Ok(product) => match self.review(&product, rating, comment) {
                Ok(updated) => Some(updated),
                Err(e) => {
                    info!("评审失败: {}", e);
                    None
                }
            },
            Err(e) => {
                info!("评审失败: {}", e);
                None
            }
        }
    }

    /// 追加评论并重算平均评分
    ///
    /// 平均分 = round_half_up(mean(评论序数))；
    /// 目录键以 apply_rating 后的新实例原子替换（take + put），
    /// 评论列表随新键保留
    pub fn review(
        &mut self,
        product: &Product,
        rating: Rating,
        comment: &str,
    ) -> Result<Product, CatalogError> {
        let (old, mut reviews) = self
            .store
            .take(product)
            .ok_or(CatalogError::ProductNotFound(product.id))?;

        reviews.push(Review::new(rating, comment));

        let sum: i64 = reviews.iter().map(|r| r.rating.ordinal()).sum();
        // 非负均值下 round() 即半进位
        let average = (sum as f64 / reviews.len() as f64).round() as i64;
        let updated = old.apply_rating(Rating::from_ordinal(average));

        self.store.put(updated.clone(), reviews);
        Ok(updated)
    }

    // ==========================================
    // 报表
    // ==========================================

    /// 按编号写报表（宽容路径: 未找到/IO 失败仅记日志）
    pub fn write_report_by_id(&mut self, id: i32) {
        match self.find_by_id(id) {
            Ok(product) => {
                if let Err(e) = self.write_report(&product) {
                    error!("报表写出失败: id={} {}", id, e);
                }
            }
            Err(e) => info!("报表未写出: {}", e),
        }
    }

    /// 写出逐商品报表文件
    ///
    /// 内容: 格式化商品行 + 按评分升序的评论行
    /// （无评论时为本地化占位行）
    pub fn write_report(&self, product: &Product) -> Result<(), CatalogError> {
        let reviews = self
            .store
            .reviews(product)
            .ok_or(CatalogError::ProductNotFound(product.id))?;

        let mut sorted: Vec<&Review> = reviews.iter().collect();
        sorted.sort_by_key(|r| r.rating);

        let mut lines = vec![self.formatter.format_product(product)];
        if sorted.is_empty() {
            lines.push(self.formatter.text("format.no_reviews"));
        } else {
            lines.extend(sorted.iter().map(|r| self.formatter.format_review(r)));
        }

        let path = self.config.report_file(product.id);
        fs::write(&path, lines.join("\n") + "\n")?;
        info!("报表已写出: {}", path.display());
        Ok(())
    }

    // ==========================================
    // 清单与折扣汇总
    // ==========================================

    /// 过滤 + 稳定排序后的格式化清单（每商品一行）
    pub fn list<F, S>(&self, filter: F, mut sorter: S) -> String
    where
        F: Fn(&Product) -> bool,
        S: FnMut(&Product, &Product) -> Ordering,
    {
        let mut selected: Vec<&Product> = self.store.keys().filter(|p| filter(p)).collect();
        // 稳定排序，无隐式次级键
        selected.sort_by(|a, b| sorter(*a, *b));

        selected
            .iter()
            .map(|p| self.formatter.format_product(p))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// 按星形串分组的折扣总额（本地化货币串）
    pub fn discount_totals(&self) -> BTreeMap<String, String> {
        let mut groups: BTreeMap<String, Decimal> = BTreeMap::new();
        for product in self.store.keys() {
            let total = groups.entry(product.rating.stars()).or_insert(Decimal::ZERO);
            *total += product.discount(self.clock.as_ref());
        }

        groups
            .into_iter()
            .map(|(stars, total)| (stars, self.formatter.format_currency(total)))
            .collect()
    }

    // ==========================================
    // 快照 dump / restore
    // ==========================================

    /// 整目录快照落盘后清空内存目录
    ///
    /// 落盘失败仅记日志，目录保持不变（全有或全无）
    pub fn dump(&mut self) {
        if let Err(e) = self.try_dump() {
            error!("快照落盘失败: {}", e);
        }
    }

    fn try_dump(&mut self) -> Result<(), CatalogError> {
        if !self.config.temp_dir.exists() {
            fs::create_dir_all(&self.config.temp_dir)?;
        }

        // 先整体编码，写盘成功后才清空
        let blob = bincode::serialize(&self.store)
            .map_err(|e| CatalogError::SnapshotEncode(e.to_string()))?;
        let path = self.config.snapshot_file(self.clock.timestamp_millis());
        fs::write(&path, blob)?;

        info!("快照已落盘: {} ({} 条目)", path.display(), self.store.len());
        self.store.clear();
        Ok(())
    }

    /// 从快照恢复目录并删除快照文件
    ///
    /// 取快照目录中第一个匹配后缀的文件 —— 按目录遍历序，
    /// 不是最新优先（既有行为，按规格保留）。
    /// 无文件/解码失败仅记日志，目录保持不变
    pub fn restore(&mut self) {
        if let Err(e) = self.try_restore() {
            error!("快照恢复失败: {}", e);
        }
    }

    fn try_restore(&mut self) -> Result<(), CatalogError> {
        let path = self.find_snapshot()?;
        let blob = fs::read(&path)?;
        let restored: CatalogStore = bincode::deserialize(&blob)
            .map_err(|e| CatalogError::SnapshotDecode(e.to_string()))?;

        // 解码成功后先删源文件再替换，失败路径不触碰内存目录
        fs::remove_file(&path)?;
        self.store = restored;

        info!("快照已恢复: {} ({} 条目)", path.display(), self.store.len());
        Ok(())
    }

    fn find_snapshot(&self) -> Result<PathBuf, CatalogError> {
        let entries = match fs::read_dir(&self.config.temp_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CatalogError::RestoreNotFound)
            }
            Err(e) => return Err(e.into()),
        };

        for entry in entries {
            let entry = entry?;
            if entry
                .file_name()
                .to_string_lossy()
                .ends_with(SNAPSHOT_SUFFIX)
            {
                return Ok(entry.path());
            }
        }
        Err(CatalogError::RestoreNotFound)
    }

    // ==========================================
    // 批量装载
    // ==========================================

    /// 启动批量装载: 扫描数据目录全量重建目录
    ///
    /// 坏文件/坏行记 warning 后跳过，不中断整体装载；
    /// 扫描本身失败记 error，目录保持不变
    pub fn load_all(&mut self) {
        match self.scan_data_dir() {
            Ok(entries) => {
                info!("批量装载完成: {} 条目", entries.len());
                self.store.replace_all(entries);
            }
            Err(e) => error!("批量装载失败: {}", e),
        }
    }

    fn scan_data_dir(&self) -> Result<HashMap<Product, Vec<Review>>, CatalogError> {
        let mut entries = HashMap::new();
        for dir_entry in fs::read_dir(&self.config.data_dir)? {
            let dir_entry = dir_entry?;
            let file_name = dir_entry.file_name().to_string_lossy().into_owned();
            if !file_name.starts_with(PRODUCT_FILE_PREFIX) {
                continue;
            }

            match self.load_product(&dir_entry.path()) {
                Ok(product) => {
                    let reviews = self.load_reviews(product.id);
                    entries.insert(product, reviews);
                }
                Err(e) => warn!("跳过商品文件 {}: {:#}", file_name, e),
            }
        }
        Ok(entries)
    }

    /// 解析商品文件首行
    fn load_product(&self, path: &Path) -> anyhow::Result<Product> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("读取失败: {}", path.display()))?;
        let first_line = raw.lines().next().ok_or_else(|| anyhow!("文件为空"))?;
        Ok(codec::decode_product(first_line)?)
    }

    /// 装载逐商品评论文件（缺失 ⇒ 空列表）
    fn load_reviews(&self, id: i32) -> Vec<Review> {
        let path = self.config.reviews_file(id);
        if !path.exists() {
            return Vec::new();
        }

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("评论文件读取失败 {}: {}", path.display(), e);
                return Vec::new();
            }
        };

        raw.lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| match codec::decode_review(line) {
                Ok(review) => Some(review),
                Err(e) => {
                    warn!("跳过评论行 {:?}: {}", line, e);
                    None
                }
            })
            .collect()
    }
}
