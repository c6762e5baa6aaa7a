use alloy_json_abi::JsonAbi;
use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::{sol, SolCall, SolConstructor};

/// The JSON ABI the binding was generated from
pub const WETH_ABI: &str = include_str!("WETH.json");

sol! {
    #[sol(rpc, bytecode = "60806040523480156200001157600080fd5b5060405162001f6138038062001f6183398181016040528101906200003791906200024f565b818160006200004b6200012560201b60201c565b9050806000806101000a81548173ffffffffffffffffffffffffffffffffffffffff021916908373ffffffffffffffffffffffffffffffffffffffff1602179055508073ffffffffffffffffffffffffffffffffffffffff16600073ffffffffffffffffffffffffffffffffffffffff167f8be0079c531659141344cd1fd0a4f28419497f9722a3daafe3b4186f6b6457e060405160405180910390a3508160049080519060200190620001019291906200012d565b5080600590805190602001906200011a9291906200012d565b505050505062000432565b600033905090565b8280546200013b9062000357565b90600052602060002090601f0160209004810192826200015f5760008555620001ab565b82601f106200017a57805160ff1916838001178555620001ab565b82800160010185558215620001ab579182015b82811115620001aa5782518255916020019190600101906200018d565b5b509050620001ba9190620001be565b5090565b5b80821115620001d9576000816000905550600101620001bf565b5090565b6000620001f4620001ee84620002eb565b620002c2565b9050828152602081018484840111156200020d57600080fd5b6200021a84828562000321565b509392505050565b600082601f8301126200023457600080fd5b815162000246848260208601620001dd565b91505092915050565b600080604083850312156200026357600080fd5b600083015167ffffffffffffffff8111156200027e57600080fd5b6200028c8582860162000222565b925050602083015167ffffffffffffffff811115620002aa57600080fd5b620002b88582860162000222565b9150509250929050565b6000620002ce620002e1565b9050620002dc82826200038d565b919050565b6000604051905090565b600067ffffffffffffffff821115620003095762000308620003f2565b5b620003148262000421565b9050602081019050919050565b60005b838110156200034157808201518184015260208101905062000324565b8381111562000351576000848401525b50505050565b600060028204905060018216806200037057607f821691505b60208210811415620003875762000386620003c3565b5b50919050565b620003988262000421565b810181811067ffffffffffffffff82111715620003ba57620003b9620003f2565b5b80604052505050565b7f4e487b7100000000000000000000000000000000000000000000000000000000600052602260045260246000fd5b7f4e487b7100000000000000000000000000000000000000000000000000000000600052604160045260246000fd5b6000601f19601f8301169050919050565b611b1f80620004426000396000f3fe608060405234801561001057600080fd5b50600436106100f55760003560e01c806370a0823111610097578063a457c2d711610066578063a457c2d71461028a578063a9059cbb146102ba578063dd62ed3e146102ea578063f2fde38b1461031a576100f5565b806370a0823114610214578063715018a6146102445780638da5cb5b1461024e57806395d89b411461026c576100f5565b806323b872dd116100d357806323b872dd14610166578063313ce5671461019657806339509351146101b457806340c10f19146101e4576100f5565b806306fdde03146100fa578063095ea7b31461011857806318160ddd14610148575b600080fd5b610102610336565b60405161010f919061148a565b60405180910390f35b610132600480360381019061012d9190611245565b6103c8565b60405161013f919061146f565b60405180910390f35b6101506103e6565b60405161015d91906115ec565b60405180910390f35b610180600480360381019061017b91906111f6565b6103f0565b60405161018d919061146f565b60405180910390f35b61019e6104f1565b6040516101ab9190611607565b60405180910390f35b6101ce60048036038101906101c99190611245565b6104fa565b6040516101db919061146f565b60405180910390f35b6101fe60048036038101906101f99190611245565b6105a6565b60405161020b919061146f565b60405180910390f35b61022e60048036038101906102299190611191565b610638565b60405161023b91906115ec565b60405180910390f35b61024c610681565b005b6102566107bb565b6040516102639190611454565b60405180910390f35b6102746107e4565b604051610281919061148a565b60405180910390f35b6102a4600480360381019061029f9190611245565b610876565b6040516102b1919061146f565b60405180910390f35b6102d460048036038101906102cf9190611245565b61096a565b6040516102e1919061146f565b60405180910390f35b61030460048036038101906102ff91906111ba565b610988565b60405161031191906115ec565b60405180910390f35b610334600480360381019061032f9190611191565b610a0f565b005b60606004805461034590611750565b80601f016020809104026020016040519081016040528092919081815260200182805461037190611750565b80156103be5780601f10610393576101008083540402835291602001916103be565b820191906000526020600020905b8154815290600101906020018083116103a157829003601f168201915b5050505050905090565b60006103dc6103d5610bb8565b8484610bc0565b6001905092915050565b6000600354905090565b60006103fd848484610d8b565b6000600260008673ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff1681526020019081526020016000206000610448610bb8565b73ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff168152602001908152602001600020549050828110156104c8576040517f08c379a00000000000000000000000000000000000000000000000000000000081526004016104bf9061152c565b60405180910390fd5b6104e5856104d4610bb8565b85846104e09190611694565b610bc0565b60019150509392505050565b60006012905090565b600061059c610507610bb8565b848460026000610515610bb8565b73ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060008873ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002054610597919061163e565b610bc0565b6001905092915050565b60006105b0610bb8565b73ffffffffffffffffffffffffffffffffffffffff166105ce6107bb565b73ffffffffffffffffffffffffffffffffffffffff1614610624576040517f08c379a000000000000000000000000000000000000000000000000000000000815260040161061b9061154c565b60405180910390fd5b61062e838361100d565b6001905092915050565b6000600160008373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff168152602001908152602001600020549050919050565b610689610bb8565b73ffffffffffffffffffffffffffffffffffffffff166106a76107bb565b73ffffffffffffffffffffffffffffffffffffffff16146106fd576040517f08c379a00000000000000000000000000000000000000000000000000000000081526004016106f49061154c565b60405180910390fd5b600073ffffffffffffffffffffffffffffffffffffffff1660008054906101000a900473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff167f8be0079c531659141344cd1fd0a4f28419497f9722a3daafe3b4186f6b6457e060405160405180910390a360008060006101000a81548173ffffffffffffffffffffffffffffffffffffffff021916908373ffffffffffffffffffffffffffffffffffffffff160217905550565b60008060009054906101000a900473ffffffffffffffffffffffffffffffffffffffff16905090565b6060600580546107f390611750565b80601f016020809104026020016040519081016040528092919081815260200182805461081f90611750565b801561086c5780601f106108415761010080835404028352916020019161086c565b820191906000526020600020905b81548152906001019060200180831161084f57829003601f168201915b5050505050905090565b60008060026000610885610bb8565b73ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060008573ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002054905082811015610942576040517f08c379a0000000000000000000000000000000000000000000000000000000008152600401610939906115ac565b60405180910390fd5b61095f61094d610bb8565b85858461095a9190611694565b610bc0565b600191505092915050565b600061097e610977610bb8565b8484610d8b565b6001905092915050565b6000600260008473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060008373ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002054905092915050565b610a17610bb8565b73ffffffffffffffffffffffffffffffffffffffff16610a356107bb565b73ffffffffffffffffffffffffffffffffffffffff1614610a8b576040517f08c379a0000000000000000000000000000000000000000000000000000000008152600401610a829061154c565b60405180910390fd5b600073ffffffffffffffffffffffffffffffffffffffff168173ffffffffffffffffffffffffffffffffffffffff161415610afb576040517f08c379a0000000000000000000000000000000000000000000000000000000008152600401610af2906114cc565b60405180910390fd5b8073ffffffffffffffffffffffffffffffffffffffff1660008054906101000a900473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff167f8be0079c531659141344cd1fd0a4f28419497f9722a3daafe3b4186f6b6457e060405160405180910390a3806000806101000a81548173ffffffffffffffffffffffffffffffffffffffff021916908373ffffffffffffffffffffffffffffffffffffffff16021790555050565b600033905090565b600073ffffffffffffffffffffffffffffffffffffffff168373ffffffffffffffffffffffffffffffffffffffff161415610c30576040517f08c379a0000000000000000000000000000000000000000000000000000000008152600401610c279061158c565b60405180910390fd5b600073ffffffffffffffffffffffffffffffffffffffff168273ffffffffffffffffffffffffffffffffffffffff161415610ca0576040517f08c379a0000000000000000000000000000000000000000000000000000000008152600401610c97906114ec565b60405180910390fd5b80600260008573ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060008473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff168152602001908152602001600020819055508173ffffffffffffffffffffffffffffffffffffffff168373ffffffffffffffffffffffffffffffffffffffff167f8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b92583604051610d7e91906115ec565b60405180910390a3505050565b600073ffffffffffffffffffffffffffffffffffffffff168373ffffffffffffffffffffffffffffffffffffffff161415610dfb576040517f08c379a0000000000000000000000000000000000000000000000000000000008152600401610df29061156c565b60405180910390fd5b600073ffffffffffffffffffffffffffffffffffffffff168273ffffffffffffffffffffffffffffffffffffffff161415610e6b576040517f08c379a0000000000000000000000000000000000000000000000000000000008152600401610e62906114ac565b60405180910390fd5b610e76838383611162565b6000600160008573ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002054905081811015610efd576040517f08c379a0000000000000000000000000000000000000000000000000000000008152600401610ef49061150c565b60405180910390fd5b8181610f099190611694565b600160008673ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff1681526020019081526020016000208190555081600160008573ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff1681526020019081526020016000206000828254610f9b919061163e565b925050819055508273ffffffffffffffffffffffffffffffffffffffff168473ffffffffffffffffffffffffffffffffffffffff167fddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef84604051610fff91906115ec565b60405180910390a350505050565b600073ffffffffffffffffffffffffffffffffffffffff168273ffffffffffffffffffffffffffffffffffffffff16141561107d576040517f08c379a0000000000000000000000000000000000000000000000000000000008152600401611074906115cc565b60405180910390fd5b61108960008383611162565b806003600082825461109b919061163e565b9250508190555080600160008473ffffffffffffffffffffffffffffffffffffffff1673ffffffffffffffffffffffffffffffffffffffff16815260200190815260200160002060008282546110f1919061163e565b925050819055508173ffffffffffffffffffffffffffffffffffffffff16600073ffffffffffffffffffffffffffffffffffffffff167fddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef8360405161115691906115ec565b60405180910390a35050565b505050565b60008135905061117681611abb565b92915050565b60008135905061118b81611ad2565b92915050565b6000602082840312156111a357600080fd5b60006111b184828501611167565b91505092915050565b600080604083850312156111cd57600080fd5b60006111db85828601611167565b92505060206111ec85828601611167565b9150509250929050565b60008060006060848603121561120b57600080fd5b600061121986828701611167565b935050602061122a86828701611167565b925050604061123b8682870161117c565b9150509250925092565b6000806040838503121561125857600080fd5b600061126685828601611167565b92505060206112778582860161117c565b9150509250929050565b61128a816116c8565b82525050565b611299816116da565b82525050565b60006112aa82611622565b6112b4818561162d565b93506112c481856020860161171d565b6112cd816117e0565b840191505092915050565b60006112e560238361162d565b91506112f0826117f1565b604082019050919050565b600061130860268361162d565b915061131382611840565b604082019050919050565b600061132b60228361162d565b91506113368261188f565b604082019050919050565b600061134e60268361162d565b9150611359826118de565b604082019050919050565b600061137160288361162d565b915061137c8261192d565b604082019050919050565b600061139460208361162d565b915061139f8261197c565b602082019050919050565b60006113b760258361162d565b91506113c2826119a5565b604082019050919050565b60006113da60248361162d565b91506113e5826119f4565b604082019050919050565b60006113fd60258361162d565b915061140882611a43565b604082019050919050565b6000611420601f8361162d565b915061142b82611a92565b602082019050919050565b61143f81611706565b82525050565b61144e81611710565b82525050565b60006020820190506114696000830184611281565b92915050565b60006020820190506114846000830184611290565b92915050565b600060208201905081810360008301526114a4818461129f565b905092915050565b600060208201905081810360008301526114c5816112d8565b9050919050565b600060208201905081810360008301526114e5816112fb565b9050919050565b600060208201905081810360008301526115058161131e565b9050919050565b6000602082019050818103600083015261152581611341565b9050919050565b6000602082019050818103600083015261154581611364565b9050919050565b6000602082019050818103600083015261156581611387565b9050919050565b60006020820190508181036000830152611585816113aa565b9050919050565b600060208201905081810360008301526115a5816113cd565b9050919050565b600060208201905081810360008301526115c5816113f0565b9050919050565b600060208201905081810360008301526115e581611413565b9050919050565b60006020820190506116016000830184611436565b92915050565b600060208201905061161c6000830184611445565b92915050565b600081519050919050565b600082825260208201905092915050565b600061164982611706565b915061165483611706565b9250827fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff0382111561168957611688611782565b5b828201905092915050565b600061169f82611706565b91506116aa83611706565b9250828210156116bd576116bc611782565b5b828203905092915050565b60006116d3826116e6565b9050919050565b60008115159050919050565b600073ffffffffffffffffffffffffffffffffffffffff82169050919050565b6000819050919050565b600060ff82169050919050565b60005b8381101561173b578082015181840152602081019050611720565b8381111561174a576000848401525b50505050565b6000600282049050600182168061176857607f821691505b6020821081141561177c5761177b6117b1565b5b50919050565b7f4e487b7100000000000000000000000000000000000000000000000000000000600052601160045260246000fd5b7f4e487b7100000000000000000000000000000000000000000000000000000000600052602260045260246000fd5b6000601f19601f8301169050919050565b7f45524332303a207472616e7366657220746f20746865207a65726f206164647260008201527f6573730000000000000000000000000000000000000000000000000000000000602082015250565b7f4f776e61626c653a206e6577206f776e657220697320746865207a65726f206160008201527f6464726573730000000000000000000000000000000000000000000000000000602082015250565b7f45524332303a20617070726f766520746f20746865207a65726f20616464726560008201527f7373000000000000000000000000000000000000000000000000000000000000602082015250565b7f45524332303a207472616e7366657220616d6f756e742065786365656473206260008201527f616c616e63650000000000000000000000000000000000000000000000000000602082015250565b7f45524332303a207472616e7366657220616d6f756e742065786365656473206160008201527f6c6c6f77616e6365000000000000000000000000000000000000000000000000602082015250565b7f4f776e61626c653a2063616c6c6572206973206e6f7420746865206f776e6572600082015250565b7f45524332303a207472616e736665722066726f6d20746865207a65726f20616460008201527f6472657373000000000000000000000000000000000000000000000000000000602082015250565b7f45524332303a20617070726f76652066726f6d20746865207a65726f2061646460008201527f7265737300000000000000000000000000000000000000000000000000000000602082015250565b7f45524332303a2064656372656173656420616c6c6f77616e63652062656c6f7760008201527f207a65726f000000000000000000000000000000000000000000000000000000602082015250565b7f45524332303a206d696e7420746f20746865207a65726f206164647265737300600082015250565b611ac4816116c8565b8114611acf57600080fd5b50565b611adb81611706565b8114611ae657600080fd5b5056fea26469706673582212200b2961b470f31a2a4e6222a1fec7a91515290b0e69a4fffeb01ab252beadb78864736f6c63430008030033")]
    contract WETH {
        event Approval(address indexed owner, address indexed spender, uint256 value);
        event OwnershipTransferred(address indexed previousOwner, address indexed newOwner);
        event Transfer(address indexed from, address indexed to, uint256 value);

        constructor(string memory _name, string memory _symbol);

        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
        function balanceOf(address account) external view returns (uint256);
        function decimals() external view returns (uint8);
        function decreaseAllowance(address spender, uint256 subtractedValue) external returns (bool);
        function increaseAllowance(address spender, uint256 addedValue) external returns (bool);
        function mint(address _recepient, uint256 _amount) external returns (bool);
        function name() external view returns (string memory);
        function owner() external view returns (address);
        function renounceOwnership() external;
        function symbol() external view returns (string memory);
        function totalSupply() external view returns (uint256);
        function transfer(address recipient, uint256 amount) external returns (bool);
        function transferFrom(address sender, address recipient, uint256 amount) external returns (bool);
        function transferOwnership(address newOwner) external;
    }
}

/// Parse [WETH_ABI] into a [JsonAbi]
pub fn abi() -> Result<JsonAbi, anyhow::Error> {
    let abi: JsonAbi = serde_json::from_str(WETH_ABI)?;
    Ok(abi)
}

/// The creation bytecode of the contract
pub fn bytecode() -> &'static Bytes {
    &WETH::BYTECODE
}

/// Creation bytecode followed by the ABI-encoded constructor arguments
pub fn deploy_code(name: impl Into<String>, symbol: impl Into<String>) -> Bytes {
    let args = WETH::constructorCall {
        _name: name.into(),
        _symbol: symbol.into(),
    }
    .abi_encode();

    let mut code = WETH::BYTECODE.to_vec();
    code.extend_from_slice(&args);
    Bytes::from(code)
}

pub fn encode_allowance(owner: Address, spender: Address) -> Bytes {
    let call = WETH::allowanceCall { owner, spender };
    Bytes::from(call.abi_encode())
}

pub fn encode_balance_of(account: Address) -> Bytes {
    let call = WETH::balanceOfCall { account };
    Bytes::from(call.abi_encode())
}

pub fn encode_decimals() -> Bytes {
    Bytes::from(WETH::decimalsCall {}.abi_encode())
}

pub fn encode_name() -> Bytes {
    Bytes::from(WETH::nameCall {}.abi_encode())
}

pub fn encode_owner() -> Bytes {
    Bytes::from(WETH::ownerCall {}.abi_encode())
}

pub fn encode_symbol() -> Bytes {
    Bytes::from(WETH::symbolCall {}.abi_encode())
}

pub fn encode_total_supply() -> Bytes {
    Bytes::from(WETH::totalSupplyCall {}.abi_encode())
}

pub fn encode_approve(spender: Address, amount: U256) -> Bytes {
    let call = WETH::approveCall { spender, amount };
    Bytes::from(call.abi_encode())
}

pub fn encode_decrease_allowance(spender: Address, subtracted_value: U256) -> Bytes {
    let call = WETH::decreaseAllowanceCall {
        spender,
        subtractedValue: subtracted_value,
    };
    Bytes::from(call.abi_encode())
}

pub fn encode_increase_allowance(spender: Address, added_value: U256) -> Bytes {
    let call = WETH::increaseAllowanceCall {
        spender,
        addedValue: added_value,
    };
    Bytes::from(call.abi_encode())
}

pub fn encode_mint(recipient: Address, amount: U256) -> Bytes {
    let call = WETH::mintCall {
        _recepient: recipient,
        _amount: amount,
    };
    Bytes::from(call.abi_encode())
}

pub fn encode_renounce_ownership() -> Bytes {
    Bytes::from(WETH::renounceOwnershipCall {}.abi_encode())
}

pub fn encode_transfer(recipient: Address, amount: U256) -> Bytes {
    let call = WETH::transferCall { recipient, amount };
    Bytes::from(call.abi_encode())
}

pub fn encode_transfer_from(sender: Address, recipient: Address, amount: U256) -> Bytes {
    let call = WETH::transferFromCall {
        sender,
        recipient,
        amount,
    };
    Bytes::from(call.abi_encode())
}

pub fn encode_transfer_ownership(new_owner: Address) -> Bytes {
    let call = WETH::transferOwnershipCall { newOwner: new_owner };
    Bytes::from(call.abi_encode())
}

pub fn decode_allowance(bytes: &Bytes) -> Result<U256, anyhow::Error> {
    let allowance = WETH::allowanceCall::abi_decode_returns(bytes, true)?;
    Ok(allowance._0)
}

pub fn decode_balance_of(bytes: &Bytes) -> Result<U256, anyhow::Error> {
    let balance = WETH::balanceOfCall::abi_decode_returns(bytes, true)?;
    Ok(balance._0)
}

pub fn decode_decimals(bytes: &Bytes) -> Result<u8, anyhow::Error> {
    let decimals = WETH::decimalsCall::abi_decode_returns(bytes, true)?;
    Ok(decimals._0)
}

pub fn decode_name(bytes: &Bytes) -> Result<String, anyhow::Error> {
    let name = WETH::nameCall::abi_decode_returns(bytes, true)?;
    Ok(name._0)
}

pub fn decode_owner(bytes: &Bytes) -> Result<Address, anyhow::Error> {
    let owner = WETH::ownerCall::abi_decode_returns(bytes, true)?;
    Ok(owner._0)
}

pub fn decode_symbol(bytes: &Bytes) -> Result<String, anyhow::Error> {
    let symbol = WETH::symbolCall::abi_decode_returns(bytes, true)?;
    Ok(symbol._0)
}

pub fn decode_total_supply(bytes: &Bytes) -> Result<U256, anyhow::Error> {
    let total_supply = WETH::totalSupplyCall::abi_decode_returns(bytes, true)?;
    Ok(total_supply._0)
}

/// Decode the `bool` returned by `approve`, `transfer`, `mint` and the allowance mutators
pub fn decode_success(bytes: &Bytes) -> Result<bool, anyhow::Error> {
    // every bool-returning mutator shares the same return layout
    let ok = WETH::approveCall::abi_decode_returns(bytes, true)?;
    Ok(ok._0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256, hex};
    use alloy_sol_types::{sol_data, SolEvent, SolType};

    #[test]
    fn abi_json_parses() {
        let abi = abi().unwrap();
        assert_eq!(abi.functions().count(), 15);
        assert_eq!(abi.events().count(), 3);

        let constructor = abi.constructor().unwrap();
        let inputs: Vec<&str> = constructor.inputs.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(inputs, vec!["_name", "_symbol"]);
    }

    #[test]
    fn function_selectors_match_json_abi() {
        let abi = abi().unwrap();
        let expected: [(&str, [u8; 4]); 15] = [
            ("allowance", WETH::allowanceCall::SELECTOR),
            ("approve", WETH::approveCall::SELECTOR),
            ("balanceOf", WETH::balanceOfCall::SELECTOR),
            ("decimals", WETH::decimalsCall::SELECTOR),
            ("decreaseAllowance", WETH::decreaseAllowanceCall::SELECTOR),
            ("increaseAllowance", WETH::increaseAllowanceCall::SELECTOR),
            ("mint", WETH::mintCall::SELECTOR),
            ("name", WETH::nameCall::SELECTOR),
            ("owner", WETH::ownerCall::SELECTOR),
            ("renounceOwnership", WETH::renounceOwnershipCall::SELECTOR),
            ("symbol", WETH::symbolCall::SELECTOR),
            ("totalSupply", WETH::totalSupplyCall::SELECTOR),
            ("transfer", WETH::transferCall::SELECTOR),
            ("transferFrom", WETH::transferFromCall::SELECTOR),
            ("transferOwnership", WETH::transferOwnershipCall::SELECTOR),
        ];

        for (name, selector) in expected {
            let functions = abi.function(name).unwrap();
            assert_eq!(functions.len(), 1, "{name} is overloaded");
            assert_eq!(functions[0].selector().0, selector, "selector mismatch for {name}");
        }
    }

    #[test]
    fn event_topics_match_json_abi() {
        let abi = abi().unwrap();
        let expected = [
            ("Approval", WETH::Approval::SIGNATURE_HASH),
            ("OwnershipTransferred", WETH::OwnershipTransferred::SIGNATURE_HASH),
            ("Transfer", WETH::Transfer::SIGNATURE_HASH),
        ];

        for (name, topic) in expected {
            let events = abi.event(name).unwrap();
            assert_eq!(events[0].selector(), topic, "topic mismatch for {name}");
        }

        assert_eq!(
            WETH::Transfer::SIGNATURE_HASH,
            b256!("ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef")
        );
        assert_eq!(
            WETH::OwnershipTransferred::SIGNATURE_HASH,
            b256!("8be0079c531659141344cd1fd0a4f28419497f9722a3daafe3b4186f6b6457e0")
        );
    }

    #[test]
    fn known_selectors() {
        assert_eq!(WETH::balanceOfCall::SELECTOR, hex!("70a08231"));
        assert_eq!(WETH::mintCall::SELECTOR, hex!("40c10f19"));
        assert_eq!(WETH::decreaseAllowanceCall::SELECTOR, hex!("a457c2d7"));
        assert_eq!(WETH::transferOwnershipCall::SELECTOR, hex!("f2fde38b"));
    }

    #[test]
    fn deploy_code_appends_constructor_args() {
        let code = deploy_code("Wrapped Ether", "WETH");
        let creation = bytecode();

        assert!(code.starts_with(creation.as_ref()));
        // two offsets, then a length word and one data word per string
        assert_eq!(code.len(), creation.len() + 6 * 32);

        let args = &code[creation.len()..];
        let (name, symbol) =
            <(sol_data::String, sol_data::String)>::abi_decode_params(args, true).unwrap();
        assert_eq!(name, "Wrapped Ether");
        assert_eq!(symbol, "WETH");
    }

    #[test]
    fn calldata_helpers() {
        let holder = address!("000000000000000000000000000000000000dEaD");
        let data = encode_balance_of(holder);
        assert_eq!(data.len(), 4 + 32);
        assert_eq!(&data[..4], &WETH::balanceOfCall::SELECTOR);
        assert_eq!(&data[16..], holder.as_slice());

        let data = encode_transfer_from(holder, Address::ZERO, U256::from(7));
        assert_eq!(data.len(), 4 + 3 * 32);

        let word = Bytes::from(U256::from(42).to_be_bytes::<32>().to_vec());
        assert_eq!(decode_balance_of(&word).unwrap(), U256::from(42));
        assert_eq!(decode_total_supply(&word).unwrap(), U256::from(42));
        assert_eq!(decode_decimals(&word).unwrap(), 42);

        let one = Bytes::from(U256::from(1).to_be_bytes::<32>().to_vec());
        assert!(decode_success(&one).unwrap());
        assert!(decode_balance_of(&Bytes::new()).is_err());
    }
}
