use kcksum_corelib::registry::{Registry, RegistryOptions};
use kcksum_corelib::{default_registry, list_checksum_types, RegistryError};

#[test]
fn builtin_table_is_total_under_lookup() {
    let registry = Registry::builtin(RegistryOptions {
        with_cbc_modes: true,
    })
    .expect("builtin table");
    assert!(!registry.is_empty());
    for t in registry.iter() {
        let by_code = registry.find_by_code(t.code).expect("code lookup");
        assert_eq!(by_code.name, t.name);
        let by_name = registry.find_by_name(t.name).expect("name lookup");
        assert_eq!(by_name.code, t.code);
        for alias in t.aliases {
            let by_alias = registry.find_by_name(alias).expect("alias lookup");
            assert_eq!(by_alias.code, t.code);
        }
    }
}

#[test]
fn deprecated_aliases_resolve() {
    let registry = default_registry();
    assert_eq!(
        registry.find_by_name("hmac-sha1-des3-kd").unwrap().code,
        registry.find_by_name("hmac-sha1-des3").unwrap().code
    );
    assert_eq!(registry.find_by_name("hmac-md5-earcfour").unwrap().code, -138);
}

#[test]
fn absent_values_are_not_found() {
    let registry = default_registry();
    assert!(matches!(
        registry.find_by_code(0),
        Err(RegistryError::UnknownCode(0))
    ));
    assert!(matches!(
        registry.find_by_name(""),
        Err(RegistryError::UnknownName(_))
    ));
}

#[test]
fn enumeration_carries_negotiation_attributes() {
    let infos = list_checksum_types();
    let crc = infos.iter().find(|i| i.name == "crc32").expect("crc32 listed");
    assert_eq!(crc.code, 1);
    assert!(crc.unkeyed);
    assert!(crc.not_collision_proof);
    assert_eq!(crc.length, 4);

    let aes = infos
        .iter()
        .find(|i| i.name == "hmac-sha1-96-aes256")
        .expect("aes256 hmac listed");
    assert_eq!(aes.length, 12);
    assert!(!aes.unkeyed);
}

#[test]
fn camellia256_hmac_has_its_own_code() {
    let registry = default_registry();
    let c128 = registry.find_by_name("hmac-sha1-96-camellia128").unwrap();
    let c256 = registry.find_by_name("hmac-sha1-96-camellia256").unwrap();
    assert_ne!(c256.code, c128.code);
    assert_ne!(
        c256.code,
        registry.find_by_name("hmac-sha1-96-aes256").unwrap().code
    );
}
