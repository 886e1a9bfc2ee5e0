//! LMSystem - 音乐教学管理平台后端服务
//!
//! 基于 Actix Web 构建的班级/作业/缴费管理系统后端，
//! 作业以音频形式提交，音频存放在独立的 Blob 存储中。
//!
//! # 架构
//! - `cache`: 缓存层（Moka）
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 认证授权中间件
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层（含级联删除、提交策略、费用台账）
//! - `storage`: 数据存储层（SeaORM + 文件系统 Blob 存储）
//! - `utils`: 工具函数

pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
