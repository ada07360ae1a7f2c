// ==========================================
// 商品目录管理系统 - 目录存储
// ==========================================
// 结构: Product（按 (id, name) 身份）→ 评论列表
// 红线: 每个 (id, name) 身份仅一条目
// 红线: 键替换（take + put）为单一逻辑步骤，
//       评审重算期间不存在"双条目/零条目"窗口
// ==========================================

use crate::domain::{Product, Review};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 目录存储
///
/// 仅供 CatalogManager 内部驱动；外部不可直接改写映射。
/// 可整体序列化（快照 dump/restore）。
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CatalogStore {
    entries: HashMap<Product, Vec<Review>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 仅当身份不存在时插入（既有条目与其评论保持原样）
    pub fn insert_if_absent(&mut self, product: Product) {
        self.entries.entry(product).or_default();
    }

    /// 读取某商品的评论列表
    pub fn reviews(&self, product: &Product) -> Option<&Vec<Review>> {
        self.entries.get(product)
    }

    /// 取出条目（键与评论），与 put 配对构成原子键替换
    ///
    /// 单线程持 &mut self 期间无并发观察者，取出与放回
    /// 之间的中间态不可见。
    pub fn take(&mut self, product: &Product) -> Option<(Product, Vec<Review>)> {
        self.entries.remove_entry(product)
    }

    /// 放回条目（take 的配对操作）
    pub fn put(&mut self, product: Product, reviews: Vec<Review>) {
        self.entries.insert(product, reviews);
    }

    /// 遍历目录键
    pub fn keys(&self) -> impl Iterator<Item = &Product> {
        self.entries.keys()
    }

    /// 遍历条目
    pub fn iter(&self) -> impl Iterator<Item = (&Product, &Vec<Review>)> {
        self.entries.iter()
    }

    /// 整表替换（批量装载 / 快照恢复）
    pub fn replace_all(&mut self, entries: HashMap<Product, Vec<Review>>) {
        self.entries = entries;
    }

    /// 清空（快照落盘成功后）
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
