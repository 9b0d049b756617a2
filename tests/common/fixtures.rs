//! テストフィクスチャ

pub const MINIMAL_POM: &str = "<project><version>1.0.0</version></project>";

pub const NO_VERSION_POM: &str = "<project><groupId>ch.example</groupId></project>";

#[allow(dead_code)]
pub const FULL_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd">
  <modelVersion>4.0.0</modelVersion>
  <parent>
    <groupId>org.springframework.boot</groupId>
    <artifactId>spring-boot-starter-parent</artifactId>
    <version>2.7.5</version>
  </parent>
  <groupId>ch.example</groupId>
  <artifactId>secret-watcher</artifactId>
  <!-- bumped by the release pipeline -->
  <version>0.0.1-SNAPSHOT</version>
  <properties>
    <java.version>17</java.version>
  </properties>
</project>
"#;
