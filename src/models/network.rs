/// Identificador de cadena tal como lo devuelve `eth_chainId` ("0x4").
/// Igualdad de strings; solo se ignoran mayúsculas y espacios.
pub fn same_chain(actual: &str, expected: &str) -> bool {
    actual.trim().eq_ignore_ascii_case(expected.trim())
}
